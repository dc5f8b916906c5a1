use chrono::Utc;
use rand::Rng;

const SUFFIX_LEN: usize = 9;
const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

pub const USER_PREFIX: &str = "user";
pub const JOB_PREFIX: &str = "job";
pub const APPLICATION_PREFIX: &str = "app";
pub const DOCUMENT_PREFIX: &str = "doc";
pub const REQUEST_PREFIX: &str = "req";

/// Generate `<prefix>-<unix millis>-<9 base36 chars>`.
pub fn generate_id(prefix: &str) -> String {
    let millis = Utc::now().timestamp_millis();
    let mut rng = rand::thread_rng();
    let suffix: String = (0..SUFFIX_LEN)
        .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
        .collect();
    format!("{prefix}-{millis}-{suffix}")
}

//! Canonical default values shared by the binary and tests.

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_CLASSIFIER_URL: &str = "http://127.0.0.1:5000/predict";
pub const DEFAULT_DATASET_PATH: &str = "data/chat_dataset.csv";
pub const DEFAULT_CLASSIFY_TIMEOUT_SECS: u64 = 5;

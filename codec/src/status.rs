use std::{collections::HashMap, sync::LazyLock};

/// Status-code to reason-phrase table. Fixed; extended only by a deliberate
/// change here. Initialized once and never written afterwards, so concurrent
/// reads need no synchronization.
static STATUS_TEXT: LazyLock<HashMap<u16, &'static str>> = LazyLock::new(|| {
    HashMap::from([(200, "Success"), (201, "Created"), (404, "Not Found")])
});

/// Returns the reason phrase for `status_code`, or `""` for codes outside
/// the table. An unknown code is not an error.
pub fn reason_phrase(status_code: u16) -> &'static str {
    STATUS_TEXT.get(&status_code).copied().unwrap_or_default()
}

// Human REFUSAL body.

use crate::refusal::Refusal;

pub fn render_refusal_body(refusal: &Refusal) -> Vec<String> {
    let code = refusal.code();
    vec![
        "Cannot clean the data.".to_string(),
        format!("Reason ({code}): {}.", code.reason()),
        format!("Example: {}.", refusal.kind.message()),
        format!("Next: {}", refusal.next),
    ]
}

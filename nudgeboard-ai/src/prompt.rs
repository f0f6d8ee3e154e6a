/// Build the upgrade-nudge prompt for the model. Both values are
/// interpolated verbatim; the closing instruction keeps the output to a
/// single conversational message.
pub fn build_prompt(client_name: &str, task: &str) -> String {
    format!(
        "Act as a marketing consultant's assistant. A client named '{client_name}' \
         has just completed a task: '{task}'. Generate a 'gentle upgrade prompt' to \
         encourage her to buy a premium service. The prompt should be friendly, \
         professional, and focus on helping her achieve her goals faster. The output \
         should be a single, conversational message."
    )
}

//! Prompt text for the hint and feedback flows.

use drill_core::model::Question;

/// Ask for a one or two sentence conceptual nudge that does not give the answer away.
#[must_use]
pub fn hint_prompt(question: &Question, tables: &[String]) -> String {
    let tables = if tables.is_empty() {
        String::from("(not listed)")
    } else {
        tables.join(", ")
    };
    format!(
        "You are a SQL teaching assistant.\n\
         A user is trying to solve the following SQL problem:\n\
         Title: \"{title}\"\n\
         Description: \"{description}\"\n\
         \n\
         The schema involves these tables: {tables}.\n\
         \n\
         Provide a concise, one or two-sentence hint to guide them. Do NOT give away the full \
         query or the direct answer. Focus on the core concept they need to apply (e.g., \
         \"Think about how to connect orders with returns,\" or \"Remember the keyword for \
         filtering dates.\").",
        title = question.title,
        description = question.plain_description(),
    )
}

/// Ask for a markdown review of the draft against the model solution.
#[must_use]
pub fn feedback_prompt(question: &Question, draft: &str) -> String {
    format!(
        "You are a SQL expert reviewing a user's query.\n\
         The problem was:\n\
         Title: \"{title}\"\n\
         Description: \"{description}\"\n\
         \n\
         The model solution is:\n\
         ```sql\n\
         {solution}\n\
         ```\n\
         \n\
         The user's submitted query is:\n\
         ```sql\n\
         {draft}\n\
         ```\n\
         \n\
         Please provide feedback on the user's query. Compare it to the model solution.\n\
         - If it's correct and functionally equivalent, praise them and perhaps point out any \
         minor stylistic differences.\n\
         - If it's incorrect, explain what's wrong with their logic and guide them toward the \
         correct approach.\n\
         - Keep the feedback concise and encouraging. Use markdown for formatting.",
        title = question.title,
        description = question.plain_description(),
        solution = question.solution,
        draft = draft.trim_end(),
    )
}

// Prompt templates for the research pipeline

use crate::llm::ChatMessage;

/// Answer-or-summarize prompt for one scraped page
pub const SUMMARY_TEMPLATE: &str = r#"{{text}}

-------------
Using the above text summarize the following question:
> {{question}}

-------------
if the question cannot be answered using the text, imply summarize the text. Include all factual information, numbers, stats, etc.
"#;

/// Asks for exactly three search queries as a JSON array
pub const SEARCH_QUERIES_TEMPLATE: &str = r#"Write 3 google search queries to serach online that form an objective opinion from the following: {{question}}
You must respond with a list of strings in the following format: ["query1", "query2", "query3"].
The queries must be as objective as possible."#;

pub const WRITER_SYSTEM_PROMPT: &str = "You are an AI critical thinker research assistant. Your sole purpose is to write well written, critically acclaimed, objective and structured reports on given text.";

pub const RESEARCH_REPORT_TEMPLATE: &str = r#"Information:
--------
{{research_summary}}
--------
Using the above information, answer the following question or topic: "{{question}}" in a detailed report -- The report should focus on the answer to the question, should be well structured, informative, in depth, with facts and numbers if available and a minimum of 1,200 words.
You should strive to write the report as long as you can using all relevant and necessary information provided.
You must write the report with markdown syntax.
You MUST determine your own concrete and valid opinion based on the given information. Do NOT deter to general and meaningless conclusions.
Write all used source urls at the end of the report, and make sure to not add duplicated sources, but only one reference for each.
You must write the report in apa format.
Please do your best, this is very important to my career."#;

/// Substitute `{{name}}` placeholders in one pass.
///
/// Substituted values are never rescanned, so page text that happens to
/// contain `{{question}}` is embedded verbatim.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len() + vars.iter().map(|(_, v)| v.len()).sum::<usize>());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find("}}") {
            Some(end) => {
                let name = &after[..end];
                match vars.iter().find(|(k, _)| *k == name) {
                    Some((_, value)) => out.push_str(value),
                    None => {
                        out.push_str("{{");
                        out.push_str(name);
                        out.push_str("}}");
                    }
                }
                rest = &after[end + 2..];
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

pub fn build_summary_messages(question: &str, text: &str) -> Vec<ChatMessage> {
    vec![ChatMessage::user(render(
        SUMMARY_TEMPLATE,
        &[("text", text), ("question", question)],
    ))]
}

pub fn build_search_queries_messages(question: &str) -> Vec<ChatMessage> {
    vec![ChatMessage::user(render(
        SEARCH_QUERIES_TEMPLATE,
        &[("question", question)],
    ))]
}

pub fn build_report_messages(question: &str, research_summary: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(WRITER_SYSTEM_PROMPT),
        ChatMessage::user(render(
            RESEARCH_REPORT_TEMPLATE,
            &[("research_summary", research_summary), ("question", question)],
        )),
    ]
}

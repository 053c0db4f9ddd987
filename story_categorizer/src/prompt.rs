use crate::categories::CategorySet;

pub const SYSTEM_PROMPT: &str =
    "You are a helpful assistant that classifies stories into predefined categories.";

/// User turn asking for exactly one theme. The story is inserted verbatim.
pub fn classification_prompt(categories: &CategorySet, story: &str) -> String {
    indoc::formatdoc! {"
        Categorize the following story into one of the themes: {categories}.

        Story: \"{story}\"

        Category:",
        categories = categories.joined(),
        story = story,
    }
}

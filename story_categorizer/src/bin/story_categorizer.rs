use clap::Parser;
use story_categorizer::prelude::*;

#[derive(Parser, Debug)]
#[command(version, about = "Classify a story into one of the fixed themes")]
struct Args {
    /// Story to classify. Defaults to a built-in sample story.
    story: Option<String>,

    /// Model identifier sent to the completion service.
    #[arg(long)]
    model: Option<String>,

    /// Do not install the terminal and file logger.
    #[arg(long)]
    no_log: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut builder = Categorizer::openai().logging_enabled(!args.no_log);
    if let Some(model) = args.model {
        builder = builder.model_id(model);
    }
    let categorizer = builder.init()?;

    let story = args.story.unwrap_or_else(|| SAMPLE_STORY.to_string());
    let category = categorizer.classify(&story).await?;
    println!("Story Category: {category}");
    Ok(())
}

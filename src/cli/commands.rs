use tokio::io::AsyncReadExt;

use crate::forms::sanitize_for_context;
use crate::sanitize::{self, OutputContext};
use crate::Result;

/// Use the argument when given, otherwise read all of stdin
async fn read_input(text: Option<String>) -> Result<String> {
    match text {
        Some(text) => Ok(text),
        None => {
            let mut buf = String::new();
            tokio::io::stdin().read_to_string(&mut buf).await?;
            Ok(buf)
        }
    }
}

/// Sanitize text and print the result
pub async fn sanitize(
    text: Option<String>,
    context: OutputContext,
    max_length: Option<usize>,
) -> Result<()> {
    let input = read_input(text).await?;
    let output = sanitize_for_context(Some(&input), context, max_length)?;
    println!("{}", output.unwrap_or_default());
    Ok(())
}

/// Print the rule categories the text triggers
pub async fn scan(text: Option<String>) -> Result<()> {
    let input = read_input(text).await?;
    let findings = sanitize::scan(&input);

    if findings.is_empty() {
        println!("\x1b[32m\u{2713}\x1b[0m No dangerous constructs found");
        return Ok(());
    }

    println!("\x1b[33m!\x1b[0m {} rule categories matched:", findings.len());
    for kind in &findings {
        println!("  - {kind}");
    }
    println!("\nSanitized (plain_text):\n{}", sanitize::sanitize_str(&input));

    Ok(())
}

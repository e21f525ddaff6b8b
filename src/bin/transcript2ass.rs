use std::env;
use std::error::Error;
use std::fs;

use karasub::document::write_text_file;
use karasub::{render_documents, SubtitleConfig, Transcript};

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        println!("Uso: transcript2ass <transcript.json> [config.json] [output_base]");
        println!("Exemplo: transcript2ass interview.json subtitle_config.json interview");
        return;
    }

    let transcript_path = &args[1];
    let config_path = args.get(2);
    let output_base = args
        .get(3)
        .cloned()
        .unwrap_or_else(|| transcript_path.trim_end_matches(".json").to_string());

    match run(transcript_path, config_path.map(String::as_str), &output_base) {
        Ok(_) => println!("\n✅ Subtitle generation completed"),
        Err(e) => println!("\n❌ Subtitle generation failed: {}", e),
    }
}

fn run(
    transcript_path: &str,
    config_path: Option<&str>,
    output_base: &str,
) -> Result<(), Box<dyn Error>> {
    println!("📄 Transcript: {}", transcript_path);
    let transcript: Transcript = serde_json::from_str(&fs::read_to_string(transcript_path)?)?;

    let config = match config_path {
        Some(path) => {
            println!("⚙️  Config: {}", path);
            SubtitleConfig::from_json(&fs::read_to_string(path)?)?
        }
        None => SubtitleConfig::default(),
    };

    let output = render_documents(&transcript, &config)?;

    let ass_path = format!("{}.ass", output_base);
    write_text_file(&ass_path, &output.ass)?;
    println!(
        "📝 Wrote {} ({} styles, {} events)",
        ass_path,
        output.document.styles.len(),
        output.document.events.len()
    );

    if let Some(srt) = &output.srt {
        let srt_path = format!("{}.srt", output_base);
        write_text_file(&srt_path, srt)?;
        println!("📝 Wrote {}", srt_path);
    }

    if !output.dropped_words.is_empty() {
        println!("⚠️  Dropped {} malformed words", output.dropped_words.len());
    }

    Ok(())
}

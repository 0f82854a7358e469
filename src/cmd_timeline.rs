//! Timeline subcommand handler for ChronoLog.

use std::path::Path;

use tracing::info;

use chronolog_codec::{parse_records, MemoRecord};

/// Decode a timeline document and print its records.
pub(crate) async fn timeline(path: &Path, format: &str) -> Result<(), Box<dyn std::error::Error>> {
    let text = tokio::fs::read_to_string(path).await?;
    let records = parse_records(&text);
    info!("Decoded {} records from {}", records.len(), path.display());

    match format {
        "json" => {
            let json = serde_json::to_string_pretty(&records)?;
            println!("{}", json);
        }
        _ => {
            if records.is_empty() {
                println!("No records found.");
                return Ok(());
            }
            print!("{}", render_text(&records));
        }
    }

    Ok(())
}

fn render_text(records: &[MemoRecord]) -> String {
    let mut out = String::new();
    for (index, record) in records.iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        out.push_str(&format!("#{}", index + 1));
        if let Some(id) = &record.id {
            out.push_str(&format!(" [{}]", id));
        }
        out.push('\n');

        let metadata = &record.metadata;
        let mut fields: Vec<(&str, &str)> = Vec::new();
        if let Some(topic) = &metadata.topic {
            fields.push(("topic", topic.as_str()));
        }
        if let Some(time) = &metadata.time {
            fields.push(("time", time.as_str()));
        }
        fields.extend(metadata.links.iter().map(|link| ("link", link.as_str())));
        fields.extend(metadata.extra.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        for (key, value) in fields {
            out.push_str(&format!("  {}: {}\n", key, value));
        }

        for edge in &record.graph_connections {
            let label = edge
                .label
                .as_ref()
                .map(|label| format!(": {}", label))
                .unwrap_or_default();
            out.push_str(&format!("  [{}] -> [{}]{}\n", edge.source, edge.target, label));
        }
        for line in record.content.trim_end().lines() {
            out.push_str(&format!("  | {}\n", line));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_text() {
        let records = parse_records(
            "@topic: work\n@link: a\nfirst @id: r1\n[a] -> [b]: feeds\n\n\nsecond\n",
        );
        let text = render_text(&records);
        assert_eq!(
            text,
            "#1 [r1]\n  topic: work\n  link: a\n  [a] -> [b]: feeds\n  | first\n  | [a] -> [b]: feeds\n\
             \n#2\n  topic: work\n  | second\n"
        );
    }

    #[test]
    fn test_render_text_time_extra_and_unlabeled_edge() {
        let records = parse_records("@time: 09:30\n@mood: ok\n[x] -> [y]\n");
        assert_eq!(
            render_text(&records),
            "#1\n  time: 09:30\n  mood: ok\n  [x] -> [y]\n  | [x] -> [y]\n"
        );
    }

    #[test]
    fn test_render_text_empty() {
        assert_eq!(render_text(&[]), "");
    }

    #[tokio::test]
    async fn test_timeline_missing_file() {
        assert!(timeline(Path::new("/nonexistent/timeline.txt"), "text").await.is_err());
    }
}

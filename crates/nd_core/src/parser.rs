use crate::types::RawArticle;

/// Delimiter line separating articles in the input file.
const ARTICLE_DELIMITER: &str = "===";

/// Split raw text into articles.
///
/// Articles are separated by `===`. Within a segment, the first line is the
/// title and the remaining lines are the content. Segments that are empty
/// after trimming, or too short to carry both a title and content, are
/// silently skipped; source order is preserved.
pub fn parse_articles(raw: &str) -> Vec<RawArticle> {
    raw.split(ARTICLE_DELIMITER)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .filter_map(|segment| {
            let lines: Vec<&str> = segment.lines().collect();
            if lines.len() < 2 {
                return None;
            }
            Some(RawArticle {
                title: lines[0].trim().to_string(),
                content: lines[1..].join("\n").trim().to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_two_articles() {
        let articles = parse_articles("A\nB===C\nD");
        assert_eq!(
            articles,
            vec![
                RawArticle { title: "A".to_string(), content: "B".to_string() },
                RawArticle { title: "C".to_string(), content: "D".to_string() },
            ]
        );
    }

    #[test]
    fn test_short_segments_are_skipped() {
        let articles = parse_articles("Only a title===A\nB");
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].title, "A");
    }

    #[test]
    fn test_empty_segments_are_skipped() {
        let articles = parse_articles("===\n\n===A\nB===");
        assert_eq!(articles.len(), 1);
    }

    #[test]
    fn test_multiline_content_is_rejoined() {
        let articles = parse_articles("Title\nfirst line\nsecond line\n");
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].content, "first line\nsecond line");
    }

    #[test]
    fn test_titles_and_content_are_trimmed() {
        let articles = parse_articles("  Title  \n  body  ");
        assert_eq!(articles[0].title, "Title");
        assert_eq!(articles[0].content, "body");
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_articles("").is_empty());
    }
}

/// Block structure shared by every document format.
///
/// Text is split on `\n` and whitespace-only lines are dropped. When nothing
/// survives, the raw text is kept as a single block so that the rendered
/// document still carries exactly what the caller sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Layout<'text> {
    Raw(&'text str),
    Titled {
        title: &'text str,
        body: Vec<&'text str>,
    },
}

impl<'text> Layout<'text> {
    pub(crate) fn new(text: &'text str) -> Self {
        let mut lines = text.split('\n').filter(|line| !line.trim().is_empty());

        match lines.next() {
            Some(title) => Layout::Titled {
                title,
                body: lines.collect(),
            },
            None => Layout::Raw(text),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn blank_lines_are_dropped() {
        let layout = Layout::new("Hello\n\nWorld");

        assert_eq!(
            layout,
            Layout::Titled {
                title: "Hello",
                body: vec!["World"],
            }
        );
    }

    #[test]
    fn empty_text_is_a_single_raw_block() {
        let layout = Layout::new("");

        assert_eq!(layout, Layout::Raw(""));
    }

    #[test]
    fn whitespace_only_text_is_kept_verbatim() {
        let text = "  \n\t\n   ";
        let layout = Layout::new(text);

        assert_eq!(layout, Layout::Raw(text));
    }

    #[test]
    fn order_is_preserved_and_lines_are_not_trimmed() {
        let text = "The Title\n  first line \n\n \nsecond line\n\t\nthird line\n";
        let layout = Layout::new(text);

        assert_eq!(
            layout,
            Layout::Titled {
                title: "The Title",
                body: vec!["  first line ", "second line", "third line"],
            }
        );
    }

    #[test]
    fn single_line_has_no_body() {
        let layout = Layout::new("\n\nOnly a title\n\n");

        assert_eq!(
            layout,
            Layout::Titled {
                title: "Only a title",
                body: vec![],
            }
        );
    }

    #[test]
    fn carriage_returns_stay_on_the_line() {
        let layout = Layout::new("Title\r\nBody\r\n\r\n");

        assert_eq!(
            layout,
            Layout::Titled {
                title: "Title\r",
                body: vec!["Body\r"],
            }
        );
    }
}

use crate::io::error::Error;
use quick_xml::Reader;
use quick_xml::events::Event;
use std::io::BufRead;

/// Kind of tag-boundary event the cursor is positioned on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// An opening tag; its name is available via [`TokenSource::tag_name`].
    Start,
    /// A closing tag.
    End,
    /// The document ended.
    Eof,
}

/// Cursor over a stream of tag-boundary events.
///
/// This is the whole tokenizer contract the parser depends on: advance
/// one event, ask the current tag name, or capture the text content of
/// the current element. The parser never looks ahead more than one event.
pub trait TokenSource {
    /// Advances to the next tag boundary, skipping anything in between.
    fn advance(&mut self) -> Result<EventKind, Error>;

    /// Name of the tag the cursor is on. Empty before the first advance.
    fn tag_name(&self) -> &str;

    /// Reads the character content of the current element, consuming
    /// events up to and including its closing tag.
    fn read_text(&mut self) -> Result<String, Error>;
}

/// [`TokenSource`] over a `quick-xml` pull reader.
pub struct XmlTokens<R: BufRead> {
    reader: Reader<R>,
    buf: Vec<u8>,
    name: String,
    // set when an empty-element tag was reported as Start and its
    // matching End still has to be synthesized
    pending_end: bool,
}

impl<R: BufRead> XmlTokens<R> {
    pub fn new(input: R) -> Self {
        let mut reader = Reader::from_reader(input);
        reader.config_mut().trim_text(true);
        Self {
            reader,
            buf: Vec::new(),
            name: String::new(),
            pending_end: false,
        }
    }
}

fn local_name(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw).into_owned()
}

impl<R: BufRead> TokenSource for XmlTokens<R> {
    fn advance(&mut self) -> Result<EventKind, Error> {
        if self.pending_end {
            self.pending_end = false;
            return Ok(EventKind::End);
        }
        loop {
            self.buf.clear();
            match self.reader.read_event_into(&mut self.buf)? {
                Event::Start(e) => {
                    self.name = local_name(e.local_name().into_inner());
                    return Ok(EventKind::Start);
                }
                Event::End(e) => {
                    self.name = local_name(e.local_name().into_inner());
                    return Ok(EventKind::End);
                }
                Event::Empty(e) => {
                    self.name = local_name(e.local_name().into_inner());
                    self.pending_end = true;
                    return Ok(EventKind::Start);
                }
                Event::Eof => return Ok(EventKind::Eof),
                // text, CDATA, comments, declarations, PIs
                _ => {}
            }
        }
    }

    fn tag_name(&self) -> &str {
        &self.name
    }

    fn read_text(&mut self) -> Result<String, Error> {
        if self.pending_end {
            // empty element, nothing to read and no close tag to consume
            self.pending_end = false;
            return Ok(String::new());
        }
        let mut text = String::new();
        loop {
            self.buf.clear();
            match self.reader.read_event_into(&mut self.buf)? {
                Event::Text(t) => text.push_str(&t.unescape()?),
                Event::CData(t) => text.push_str(&String::from_utf8_lossy(&t)),
                Event::End(_) | Event::Eof => break,
                _ => {}
            }
        }
        Ok(text)
    }
}

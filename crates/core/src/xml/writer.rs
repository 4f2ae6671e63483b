use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::error::SerializeError;
use crate::options::WriteOptions;

/// Attribute list under construction; absent optional values are skipped.
#[derive(Debug, Default)]
pub(crate) struct Attrs(Vec<(&'static str, String)>);

impl Attrs {
    pub fn new() -> Self {
        Attrs(Vec::new())
    }

    pub fn with(mut self, name: &'static str, value: impl ToString) -> Self {
        self.0.push((name, value.to_string()));
        self
    }

    pub fn opt(self, name: &'static str, value: Option<impl ToString>) -> Self {
        match value {
            Some(v) => self.with(name, v),
            None => self,
        }
    }
}

pub(crate) struct XmlSink {
    writer: Writer<Vec<u8>>,
}

fn xml_err(e: impl std::fmt::Display) -> SerializeError {
    SerializeError::Xml(e.to_string())
}

impl XmlSink {
    pub fn new(options: &WriteOptions) -> Self {
        let writer = if options.indent > 0 {
            Writer::new_with_indent(Vec::new(), b' ', options.indent)
        } else {
            Writer::new(Vec::new())
        };
        XmlSink { writer }
    }

    pub fn declaration(&mut self) -> Result<(), SerializeError> {
        self.writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
            .map_err(xml_err)
    }

    fn start_tag<'a>(tag: &'a str, attrs: &'a Attrs) -> BytesStart<'a> {
        let mut start = BytesStart::new(tag);
        for (name, value) in &attrs.0 {
            start.push_attribute((*name, value.as_str()));
        }
        start
    }

    pub fn start(&mut self, tag: &str, attrs: Attrs) -> Result<(), SerializeError> {
        self.writer
            .write_event(Event::Start(Self::start_tag(tag, &attrs)))
            .map_err(xml_err)
    }

    pub fn end(&mut self, tag: &str) -> Result<(), SerializeError> {
        self.writer
            .write_event(Event::End(BytesEnd::new(tag)))
            .map_err(xml_err)
    }

    pub fn empty(&mut self, tag: &str, attrs: Attrs) -> Result<(), SerializeError> {
        self.writer
            .write_event(Event::Empty(Self::start_tag(tag, &attrs)))
            .map_err(xml_err)
    }

    /// `<tag>text</tag>`, or `<tag/>` for empty text.
    pub fn text_element(&mut self, tag: &str, text: &str) -> Result<(), SerializeError> {
        if text.is_empty() {
            return self.empty(tag, Attrs::new());
        }
        self.start(tag, Attrs::new())?;
        self.writer
            .write_event(Event::Text(BytesText::new(text)))
            .map_err(xml_err)?;
        self.end(tag)
    }

    pub fn finish(self) -> Result<String, SerializeError> {
        String::from_utf8(self.writer.into_inner())
            .map_err(|e| SerializeError::Utf8(e.to_string()))
    }
}

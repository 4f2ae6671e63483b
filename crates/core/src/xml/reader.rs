//! Pull-parser driver: walks the document once, depth-first, and feeds each
//! element to the binding registered for its tag.
//!
//! Elements with no registered binding and no element children are handed
//! to the parent as text-valued children. Unregistered elements with element
//! children are skipped along with their whole subtree.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::binding::{binding_for, Bound, ElementBinding};
use crate::error::ParseError;
use crate::options::ParseOptions;

/// Attributes of one element, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes(Vec<(String, String)>);

impl Attributes {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Attributes(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

enum Frame {
    Bound {
        tag: String,
        binding: Box<dyn ElementBinding>,
    },
    Leaf {
        tag: String,
        attributes: Attributes,
        text: String,
        has_children: bool,
    },
}

struct Driver<'o> {
    options: &'o ParseOptions,
    stack: Vec<Frame>,
    root: Option<Bound>,
}

/// Bind a whole document and return the object produced for its root element.
pub(crate) fn bind_document(xml: &str, options: &ParseOptions) -> Result<Bound, ParseError> {
    let mut reader = Reader::from_str(xml);
    let mut driver = Driver {
        options,
        stack: Vec::new(),
        root: None,
    };

    loop {
        let event = reader.read_event().map_err(|e| ParseError::Xml {
            position: reader.buffer_position() as u64,
            message: e.to_string(),
        })?;
        let position = reader.buffer_position() as u64;
        match event {
            Event::Start(e) => {
                let (tag, attributes) = read_start(&e, position)?;
                driver.open(tag, attributes)?;
            }
            Event::Empty(e) => {
                let (tag, attributes) = read_start(&e, position)?;
                driver.open(tag, attributes)?;
                driver.close()?;
            }
            Event::End(_) => driver.close()?,
            Event::Text(t) => {
                let text = t.unescape().map_err(|e| ParseError::Xml {
                    position,
                    message: e.to_string(),
                })?;
                driver.text(&text);
            }
            Event::CData(c) => {
                let text = std::str::from_utf8(&c).map_err(|e| ParseError::Xml {
                    position,
                    message: e.to_string(),
                })?;
                driver.text(text);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(frame) = driver.stack.last() {
        let tag = match frame {
            Frame::Bound { tag, .. } | Frame::Leaf { tag, .. } => tag.clone(),
        };
        return Err(ParseError::structure(&tag, "element is never closed"));
    }
    driver
        .root
        .ok_or_else(|| ParseError::structure("document", "no recognized root element"))
}

fn read_start(e: &BytesStart<'_>, position: u64) -> Result<(String, Attributes), ParseError> {
    let xml_err = |message: String| ParseError::Xml { position, message };
    let local = e.local_name();
    let tag = std::str::from_utf8(local.as_ref())
        .map_err(|err| xml_err(err.to_string()))?
        .to_owned();
    let mut attributes = Vec::new();
    for attr in e.attributes() {
        let attr = attr.map_err(|err| xml_err(err.to_string()))?;
        let key = std::str::from_utf8(attr.key.local_name().as_ref())
            .map_err(|err| xml_err(err.to_string()))?
            .to_owned();
        if attr.key.as_ref().starts_with(b"xmlns") {
            continue;
        }
        let value = attr
            .unescape_value()
            .map_err(|err| xml_err(err.to_string()))?
            .into_owned();
        attributes.push((key, value));
    }
    Ok((tag, Attributes(attributes)))
}

impl Driver<'_> {
    fn open(&mut self, tag: String, attributes: Attributes) -> Result<(), ParseError> {
        let inside_skipped = match self.stack.last_mut() {
            Some(Frame::Leaf { has_children, .. }) => {
                *has_children = true;
                true
            }
            _ => false,
        };
        let binding = if inside_skipped {
            None
        } else {
            binding_for(&tag, self.options)
        };
        match binding {
            Some(mut binding) => {
                binding.set_attributes(&attributes)?;
                self.stack.push(Frame::Bound { tag, binding });
            }
            None => self.stack.push(Frame::Leaf {
                tag,
                attributes,
                text: String::new(),
                has_children: false,
            }),
        }
        Ok(())
    }

    fn text(&mut self, value: &str) {
        if let Some(Frame::Leaf { text, .. }) = self.stack.last_mut() {
            text.push_str(value);
        }
    }

    fn close(&mut self) -> Result<(), ParseError> {
        let frame = self
            .stack
            .pop()
            .ok_or_else(|| ParseError::structure("document", "unbalanced end tag"))?;
        match frame {
            Frame::Bound { tag, binding } => {
                let object = binding.get_object()?;
                match self.stack.last_mut() {
                    Some(Frame::Bound { binding: parent, .. }) => {
                        parent.set_child_object(&tag, object)?;
                    }
                    Some(Frame::Leaf { .. }) => {}
                    None => self.root = Some(object),
                }
            }
            Frame::Leaf {
                tag,
                attributes,
                text,
                has_children,
            } => {
                if let Some(Frame::Bound { binding: parent, .. }) = self.stack.last_mut() {
                    if !has_children {
                        parent.set_child_element(&tag, &text, &attributes)?;
                    }
                }
            }
        }
        Ok(())
    }
}

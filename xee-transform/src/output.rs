//! Serialization of transform results.
//!
//! The serialization settings come from the top-level `xsl:output`
//! declarations of the stylesheet. Command line options override them.

use xee_interpreter::error::Error as XeeError;
use xee_interpreter::sequence::Sequence;
use xot::{Node, Xot};

use crate::engine::TransformOptions;

pub(crate) const XSLT_NAMESPACE: &str = "http://www.w3.org/1999/XSL/Transform";

/// Separator between adjacent atomic values in the result.
const ITEM_SEPARATOR: &str = " ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMethod {
    Xml,
    Html,
    Text,
}

/// The merged unnamed `xsl:output` declarations of a stylesheet.
///
/// Fields are `None` where the stylesheet says nothing; the defaults are
/// filled in by [`OutputDeclaration::resolve`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputDeclaration {
    pub method: Option<OutputMethod>,
    pub indent: Option<bool>,
    pub omit_xml_declaration: Option<bool>,
    pub encoding: Option<String>,
}

impl OutputDeclaration {
    /// Read the `xsl:output` elements directly under the document element of
    /// a stylesheet. Later declarations win per attribute. Named output
    /// definitions (for `xsl:result-document`) are ignored.
    pub(crate) fn from_stylesheet(xot: &Xot, root: Node) -> Result<Self, String> {
        let mut declaration = OutputDeclaration::default();
        for node in output_elements(xot, root) {
            if attribute(xot, node, "name").is_some() {
                continue;
            }
            if let Some(method) = attribute(xot, node, "method") {
                declaration.method = Some(parse_method(method)?);
            }
            if let Some(indent) = attribute(xot, node, "indent") {
                declaration.indent = Some(parse_yes_no("indent", indent)?);
            }
            if let Some(omit) = attribute(xot, node, "omit-xml-declaration") {
                declaration.omit_xml_declaration =
                    Some(parse_yes_no("omit-xml-declaration", omit)?);
            }
            if let Some(encoding) = attribute(xot, node, "encoding") {
                declaration.encoding = Some(encoding.to_string());
            }
        }
        Ok(declaration)
    }

    /// Apply command line overrides and defaults.
    pub(crate) fn resolve(&self, options: &TransformOptions) -> Serialization {
        let method = self.method;
        // html indents unless told otherwise
        let indent = options
            .indent
            .or(self.indent)
            .unwrap_or(method == Some(OutputMethod::Html));
        Serialization {
            method,
            indent,
            omit_xml_declaration: options
                .omit_xml_declaration
                .or(self.omit_xml_declaration)
                .unwrap_or(false),
        }
    }
}

/// The `xsl:output` elements directly under the stylesheet's document
/// element, named ones included.
fn output_elements(xot: &Xot, root: Node) -> Vec<Node> {
    let Ok(document_element) = xot.document_element(root) else {
        return Vec::new();
    };
    let Some(output) = xot
        .namespace(XSLT_NAMESPACE)
        .and_then(|namespace| xot.name_ns("output", namespace))
    else {
        return Vec::new();
    };
    xot.children(document_element)
        .filter(|node| {
            xot.element(*node)
                .map(|element| element.name() == output)
                .unwrap_or(false)
        })
        .collect()
}

/// Remove the `xsl:output` declarations from a parsed stylesheet, once they
/// have been read. The compiler does not accept them. Returns whether
/// anything was removed.
pub(crate) fn remove_output_elements(xot: &mut Xot, root: Node) -> Result<bool, xot::Error> {
    let nodes = output_elements(xot, root);
    for node in &nodes {
        xot.remove(*node)?;
    }
    Ok(!nodes.is_empty())
}

fn attribute<'a>(xot: &'a Xot, node: Node, name: &str) -> Option<&'a str> {
    xot.name(name)
        .and_then(|name| xot.get_attribute(node, name))
        .map(str::trim)
}

fn parse_method(value: &str) -> Result<OutputMethod, String> {
    match value {
        "xml" | "xhtml" => Ok(OutputMethod::Xml),
        "html" => Ok(OutputMethod::Html),
        "text" => Ok(OutputMethod::Text),
        other => Err(format!("unsupported output method {:?}", other)),
    }
}

fn parse_yes_no(attribute: &str, value: &str) -> Result<bool, String> {
    match value {
        "yes" | "true" | "1" => Ok(true),
        "no" | "false" | "0" => Ok(false),
        other => Err(format!("invalid value {:?} for {}", other, attribute)),
    }
}

/// Resolved serialization settings for one transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Serialization {
    /// `None` picks html when the result's document element is an
    /// unqualified `html` element, xml otherwise.
    method: Option<OutputMethod>,
    indent: bool,
    omit_xml_declaration: bool,
}

impl Serialization {
    /// Serialize a result sequence. The text always ends in exactly one
    /// newline.
    pub(crate) fn serialize(&self, result: &Sequence, xot: &mut Xot) -> Result<String, XeeError> {
        let node = result.normalize(ITEM_SEPARATOR, xot)?;
        let method = self.method.unwrap_or_else(|| default_method(xot, node));
        let indentation = self
            .indent
            .then(|| xot::output::Indentation { suppress: vec![] });

        let mut text = match method {
            OutputMethod::Xml => {
                let declaration = (!self.omit_xml_declaration).then(|| {
                    xot::output::xml::Declaration {
                        encoding: Some("UTF-8".to_string()),
                        standalone: None,
                    }
                });
                let parameters = xot::output::xml::Parameters {
                    indentation,
                    declaration,
                    ..Default::default()
                };
                xot.serialize_xml_string(parameters, node)?
            }
            OutputMethod::Html => {
                let parameters = xot::output::html5::Parameters {
                    indentation,
                    ..Default::default()
                };
                xot.html5().serialize_string(parameters, node)?
            }
            OutputMethod::Text => xot.string_value(node),
        };
        if !text.ends_with('\n') {
            text.push('\n');
        }
        Ok(text)
    }
}

fn default_method(xot: &Xot, node: Node) -> OutputMethod {
    let is_html = xot
        .document_element(node)
        .ok()
        .and_then(|element| xot.element(element))
        .map(|element| {
            let (local, namespace) = xot.name_ns_str(element.name());
            namespace.is_empty() && local.eq_ignore_ascii_case("html")
        })
        .unwrap_or(false);
    if is_html {
        OutputMethod::Html
    } else {
        OutputMethod::Xml
    }
}

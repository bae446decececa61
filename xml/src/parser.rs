//! Parser for a subset of the [RDF/XML] concrete syntax of RDF,
//! based on [`quick_xml`].
//!
//! Supported:
//! * an `rdf:RDF` root element,
//! * node elements (`rdf:Description` or typed) identified by `rdf:about` or `rdf:ID`,
//! * empty property elements pointing to an IRI with `rdf:resource`,
//! * `xml:base` on any element.
//!
//! Anything else (literals, blank nodes, nested node elements, `rdf:parseType`...)
//! is rejected.
//!
//! [RDF/XML]: https://www.w3.org/TR/rdf-syntax-grammar/

use quick_xml::events::{BytesStart, Event};
use quick_xml::name::{Namespace, ResolveResult};
use quick_xml::NsReader;
use relbase_api::graph::MutableGraph;
use relbase_api::ns::rdf;
use relbase_api::parser::{resolve_iri_ref, Location, ParseError, TripleParser};
use relbase_iri::Iri;

/// RDF/XML parser.
#[derive(Clone, Debug, Default)]
pub struct RdfXmlParser {
    /// The base IRI used by this parser to resolve relative IRI-references,
    /// where no `xml:base` applies.
    pub base: Option<Iri<String>>,
}

impl TripleParser for RdfXmlParser {
    fn parse_into<G: MutableGraph>(&self, txt: &str, graph: &mut G) -> Result<usize, ParseError> {
        let mut state = RdfXmlState {
            reader: NsReader::from_str(txt),
            base: self.base.clone(),
            stack: vec![],
            seen_root: false,
            count: 0,
        };
        state.document(graph)?;
        log::debug!("{} triples parsed from RDF/XML", state.count);
        Ok(state.count)
    }
}

relbase_api::def_mod_functions_for_str_parser!(RdfXmlParser);

/// Names of the RDF namespace which can not be used as node or property elements.
const FORBIDDEN_NAMES: &[Iri<&str>] = &[
    rdf::RDF,
    rdf::ID,
    rdf::about,
    rdf::bagID,
    rdf::parseType,
    rdf::resource,
    rdf::nodeID,
    rdf::datatype,
    rdf::aboutEach,
    rdf::aboutEachPrefix,
];

/// What an open element is.
#[derive(Clone, Debug)]
enum Context {
    Rdf,
    Node(Iri<String>),
    Property,
}

#[derive(Debug)]
struct Scope {
    base: Option<Iri<String>>,
    context: Context,
}

/// An expanded XML name.
struct Name {
    ns: String,
    local: String,
}

impl Name {
    fn is(&self, iri: &Iri<&str>) -> bool {
        iri.as_str().strip_prefix(self.ns.as_str()) == Some(self.local.as_str())
    }

    fn is_any(&self, iris: &[Iri<&str>]) -> bool {
        iris.iter().any(|iri| self.is(iri))
    }

    fn iri(&self, location: Location) -> Result<Iri<String>, ParseError> {
        let txt = format!("{}{}", self.ns, self.local);
        Iri::new(txt).map_err(|err| ParseError::MalformedIri {
            iri: err.0,
            location,
        })
    }
}

/// An attribute that is neither a namespace declaration nor in the `xml` namespace.
struct Attribute {
    name: Name,
    value: String,
}

struct RdfXmlState<'a> {
    reader: NsReader<&'a [u8]>,
    base: Option<Iri<String>>,
    stack: Vec<Scope>,
    seen_root: bool,
    count: usize,
}

impl<'a> RdfXmlState<'a> {
    fn document<G: MutableGraph>(&mut self, graph: &mut G) -> Result<(), ParseError> {
        loop {
            let location = Location::from_offset(self.reader.buffer_position() as usize);
            let event = self.reader.read_event().map_err(|err| {
                let offset = self.reader.error_position() as usize;
                ParseError::syntax(format!("Malformed XML: {err}"), Location::from_offset(offset))
            })?;
            match event {
                Event::Start(e) => self.element(&e, false, location, graph)?,
                Event::Empty(e) => self.element(&e, true, location, graph)?,
                Event::End(_) => {
                    self.stack.pop();
                }
                Event::Text(e) => {
                    if !e.iter().all(u8::is_ascii_whitespace) {
                        return Err(ParseError::syntax(
                            "Text content is not supported",
                            location,
                        ));
                    }
                }
                Event::CData(_) => {
                    return Err(ParseError::syntax(
                        "CDATA sections are not supported",
                        location,
                    ))
                }
                Event::Eof => {
                    if !self.stack.is_empty() {
                        return Err(ParseError::syntax(
                            "Unexpected end of data, some elements are not closed",
                            location,
                        ));
                    }
                    if !self.seen_root {
                        return Err(ParseError::syntax(
                            "Expected rdf:RDF root element, found end of data",
                            location,
                        ));
                    }
                    return Ok(());
                }
                // XML declaration, comments, processing instructions, doctype
                _ => {}
            }
        }
    }

    fn element<G: MutableGraph>(
        &mut self,
        e: &BytesStart,
        empty: bool,
        location: Location,
        graph: &mut G,
    ) -> Result<(), ParseError> {
        let name = self.element_name(e, location)?;
        let base = self.element_base(e, location)?;
        let attributes = self.attributes(e, location)?;
        let parent = self.stack.last().map(|scope| scope.context.clone());
        let context = match parent {
            None if self.seen_root => {
                return Err(ParseError::syntax(
                    "Unexpected element after the root element",
                    location,
                ))
            }
            None => {
                if !name.is(&rdf::RDF) {
                    return Err(ParseError::syntax(
                        format!("Expected rdf:RDF root element, found <{}{}>", name.ns, name.local),
                        location,
                    ));
                }
                if let Some(attr) = attributes.first() {
                    return Err(unexpected_attribute(attr, location));
                }
                self.seen_root = true;
                Context::Rdf
            }
            Some(Context::Rdf) => {
                let subject = self.node_element(&name, attributes, &base, location, graph)?;
                Context::Node(subject)
            }
            Some(Context::Node(subject)) => {
                self.property_element(&name, attributes, &subject, &base, location, graph)?;
                Context::Property
            }
            Some(Context::Property) => {
                return Err(ParseError::syntax(
                    "Nested node elements are not supported",
                    location,
                ))
            }
        };
        if !empty {
            self.stack.push(Scope { base, context });
        }
        Ok(())
    }

    fn node_element<G: MutableGraph>(
        &mut self,
        name: &Name,
        attributes: Vec<Attribute>,
        base: &Option<Iri<String>>,
        location: Location,
        graph: &mut G,
    ) -> Result<Iri<String>, ParseError> {
        if name.is(&rdf::li) || name.is_any(FORBIDDEN_NAMES) {
            return Err(ParseError::syntax(
                format!("rdf:{} is not allowed as a node element", name.local),
                location,
            ));
        }
        let mut subject = None;
        for attr in attributes {
            let iri = if attr.name.is(&rdf::about) {
                resolve_iri_ref(base.as_ref(), &attr.value, location)?
            } else if attr.name.is(&rdf::ID) {
                if !is_ncname(&attr.value) {
                    return Err(ParseError::syntax(
                        format!("Invalid rdf:ID {:?}", attr.value),
                        location,
                    ));
                }
                resolve_iri_ref(base.as_ref(), &format!("#{}", attr.value), location)?
            } else if attr.name.is(&rdf::nodeID) {
                return Err(ParseError::syntax("Blank nodes are not supported", location));
            } else {
                return Err(unexpected_attribute(&attr, location));
            };
            if subject.replace(iri).is_some() {
                return Err(ParseError::syntax(
                    "A node element can not have both rdf:about and rdf:ID",
                    location,
                ));
            }
        }
        let Some(subject) = subject else {
            return Err(ParseError::syntax(
                "A node element requires rdf:about or rdf:ID (blank nodes are not supported)",
                location,
            ));
        };
        if !name.is(&rdf::Description) {
            let class = name.iri(location)?;
            self.emit(graph, &subject, &rdf::type_, &class);
        }
        Ok(subject)
    }

    fn property_element<G: MutableGraph>(
        &mut self,
        name: &Name,
        attributes: Vec<Attribute>,
        subject: &Iri<String>,
        base: &Option<Iri<String>>,
        location: Location,
        graph: &mut G,
    ) -> Result<(), ParseError> {
        if name.is(&rdf::li) {
            return Err(ParseError::syntax("rdf:li is not supported", location));
        }
        if name.is(&rdf::Description) || name.is_any(FORBIDDEN_NAMES) {
            return Err(ParseError::syntax(
                format!("rdf:{} is not allowed as a property element", name.local),
                location,
            ));
        }
        let mut object = None;
        for attr in attributes {
            if attr.name.is(&rdf::resource) {
                object = Some(resolve_iri_ref(base.as_ref(), &attr.value, location)?);
            } else if attr.name.is(&rdf::parseType) {
                return Err(ParseError::syntax("rdf:parseType is not supported", location));
            } else if attr.name.is(&rdf::nodeID) {
                return Err(ParseError::syntax("Blank nodes are not supported", location));
            } else if attr.name.is(&rdf::datatype) {
                return Err(ParseError::syntax("Literals are not supported", location));
            } else if attr.name.is(&rdf::ID) {
                return Err(ParseError::syntax("Reification is not supported", location));
            } else {
                return Err(unexpected_attribute(&attr, location));
            }
        }
        let Some(object) = object else {
            return Err(ParseError::syntax(
                "A property element requires rdf:resource",
                location,
            ));
        };
        let predicate = name.iri(location)?;
        self.emit(graph, subject, &predicate, &object);
        Ok(())
    }

    fn emit<G: MutableGraph, T: std::borrow::Borrow<str>>(
        &mut self,
        graph: &mut G,
        s: &Iri<String>,
        p: &Iri<T>,
        o: &Iri<String>,
    ) {
        log::trace!("<{s}> <{p}> <{o}>");
        graph.insert(s, p, o);
        self.count += 1;
    }

    fn element_name(&self, e: &BytesStart, location: Location) -> Result<Name, ParseError> {
        let (ns, local) = self.reader.resolve_element(e.name());
        expand(ns, local.as_ref(), e.name().as_ref(), location)
    }

    /// The base in scope for `e`, including its own `xml:base` attribute.
    fn element_base(
        &self,
        e: &BytesStart,
        location: Location,
    ) -> Result<Option<Iri<String>>, ParseError> {
        let inherited = match self.stack.last() {
            Some(scope) => scope.base.clone(),
            None => self.base.clone(),
        };
        for res in e.attributes() {
            let attr = res.map_err(|err| malformed(err, location))?;
            if attr.key.as_ref() == b"xml:base" {
                let value = attr
                    .decode_and_unescape_value(self.reader.decoder())
                    .map_err(|err| malformed(err, location))?;
                let base = resolve_iri_ref(inherited.as_ref(), &value, location)?;
                match &inherited {
                    Some(old) => log::debug!("base <{old}> overridden by <{base}> at {location}"),
                    None => log::debug!("base set to <{base}> at {location}"),
                }
                return Ok(Some(base));
            }
        }
        Ok(inherited)
    }

    /// The attributes of `e`, except namespace declarations and `xml:*` attributes.
    fn attributes(&self, e: &BytesStart, location: Location) -> Result<Vec<Attribute>, ParseError> {
        let mut attributes = vec![];
        for res in e.attributes() {
            let attr = res.map_err(|err| malformed(err, location))?;
            if attr.key.as_namespace_binding().is_some() || attr.key.as_ref().starts_with(b"xml:") {
                continue;
            }
            let (ns, local) = self.reader.resolve_attribute(attr.key);
            let name = expand(ns, local.as_ref(), attr.key.as_ref(), location)?;
            let value = attr
                .decode_and_unescape_value(self.reader.decoder())
                .map_err(|err| malformed(err, location))?
                .into_owned();
            attributes.push(Attribute { name, value });
        }
        Ok(attributes)
    }
}

fn expand(
    ns: ResolveResult,
    local: &[u8],
    qname: &[u8],
    location: Location,
) -> Result<Name, ParseError> {
    let qname = String::from_utf8_lossy(qname);
    match ns {
        ResolveResult::Bound(Namespace(ns)) => Ok(Name {
            ns: utf8(ns, location)?.to_string(),
            local: utf8(local, location)?.to_string(),
        }),
        ResolveResult::Unbound => Err(ParseError::syntax(
            format!("<{qname}> is not in any namespace"),
            location,
        )),
        ResolveResult::Unknown(prefix) => Err(ParseError::syntax(
            format!("Unknown namespace prefix {:?}", String::from_utf8_lossy(&prefix)),
            location,
        )),
    }
}

fn utf8(bytes: &[u8], location: Location) -> Result<&str, ParseError> {
    std::str::from_utf8(bytes).map_err(|_| ParseError::syntax("Invalid UTF-8", location))
}

fn malformed<E: std::fmt::Display>(err: E, location: Location) -> ParseError {
    ParseError::syntax(format!("Malformed XML: {err}"), location)
}

fn unexpected_attribute(attr: &Attribute, location: Location) -> ParseError {
    ParseError::syntax(
        format!(
            "Unexpected attribute <{}{}> (property attributes are not supported)",
            attr.name.ns, attr.name.local
        ),
        location,
    )
}

/// Check that `txt` matches <https://www.w3.org/TR/xml-names/#NT-NCName> (approximately).
fn is_ncname(txt: &str) -> bool {
    let mut chars = txt.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {
            chars.all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.' | '\u{B7}'))
        }
        _ => false,
    }
}

// ---------------------------------------------------------------------------------
//                                      tests
// ---------------------------------------------------------------------------------

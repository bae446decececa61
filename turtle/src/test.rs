use crate::parser::{nt, turtle};
use crate::serializer::nt::NtSerializer;
use relbase_api::graph::Graph;
use relbase_api::parser::{ErrorKind, ParseError, TripleParser};
use relbase_api::serializer::{Stringifier, TripleSerializer};
use relbase_inmem::LightGraph;
use relbase_iri::Iri;

#[rustfmt::skip]
pub(crate) static NT_SAMPLES: &[(&str, &str, usize)] = &[
    ("empty", "", 0),
    ("comment", "# a comment", 0),
    ("blank lines", "\n\n  \t\n", 0),
    ("triple",         r#"<x:s> <x:p> <x:o>.                      "#, 1),
    ("spaced",         r#"  <x:s>   <x:p>   <x:o>   .   # comment "#, 1),
    ("private scheme", r#"<x-madeup://h/s> <app://h/p> <ssh://h/o> ."#, 1),
    ("dotted scheme",  r#"<org.apache.jena.test://foo/s> <x:p> <x:o> ."#, 1),
    ("not normalized", r#"<x:a/../s> <x:p> <x:o> ."#, 1),
    ("escaped",        r#"<x:\u0073> <x:p> <x:o> ."#, 1),
    ("duplicates", "<x:s> <x:p> <x:o>.\n<x:s> <x:p> <x:o>.\r\n<x:s> <x:p> <x:o2>.", 3),
    ("byte order mark", "\u{feff}<x:s> <x:p> <x:o> .", 1),
];

#[rustfmt::skip]
pub(crate) static NT_NEGATIVE: &[(&str, &str, ErrorKind)] = &[
    ("relative subject", r#"<s> <x:p> <x:o> ."#,       ErrorKind::Syntax),
    ("literal",          r#"<x:s> <x:p> "o" ."#,       ErrorKind::Syntax),
    ("bnode",            r#"_:s <x:p> <x:o> ."#,       ErrorKind::Syntax),
    ("variable",         r#"?s <x:p> <x:o> ."#,        ErrorKind::Syntax),
    ("missing object",   r#"<x:s> <x:p> ."#,           ErrorKind::Syntax),
    ("version",          r#"VERSION "1.2""#,           ErrorKind::Syntax),
    ("bad escape",       r#"<x:\u00> <x:p> <x:o> ."#,  ErrorKind::Syntax),
    ("bad percent",      r#"<x:%zz> <x:p> <x:o> ."#,   ErrorKind::MalformedIri),
    ("bad scheme",       r#"<1x:s> <x:p> <x:o> ."#,    ErrorKind::MalformedIri),
];

/// Turtle samples, parsed with the base `app://h/nested/`.
#[rustfmt::skip]
pub(crate) static TURTLE_SAMPLES: &[(&str, &str, usize)] = &[
    ("empty", "", 0),
    ("absolute", "<x:s> <x:p> <x:o>.", 1),
    ("relative", "<foo.txt> <p> <../bar.txt>.", 1),
    ("byte order mark", "\u{feff}@base <app://h/x/> .\n<s> <p> <o> .", 1),
    (
        "factorized triples",
        r#"
        <alice> a <Person>; <name> <n1>; <knows> <bob>.
        <bob> a <Person>, <Man>; <nick> <n2>, <n3>; <admin> <yes>;.
        "#,
        8,
    ),
    (
        "multiline",
        r#"
        <s>
            <p>
                <o1> ,
                <o2> ;
            # a comment in the middle
            <q>
                <o3>
        .
        "#,
        3,
    ),
    (
        "redundant semicolons",
        "<s> <p> <o> ;; <q> <o> ; ; .",
        2,
    ),
    (
        "bases",
        r#"
        @base <ssh://example.com/> .
        <s> <p> <o>.
        BASE <sub/>
        <s> <p> <o>.
        @base <#frag> .
        <s> <p> <o>.
        "#,
        3,
    ),
];

#[rustfmt::skip]
pub(crate) static TURTLE_NEGATIVE: &[(&str, &str, ErrorKind)] = &[
    ("prefix",          "@prefix : <x:>.",               ErrorKind::Syntax),
    ("sparql prefix",   "prefix : <x:>",                 ErrorKind::Syntax),
    ("prefixed name",   "<s> rdf:type <o>.",             ErrorKind::Syntax),
    ("literal",         "<s> <p> 'o'.",                  ErrorKind::Syntax),
    ("bnode",           "_:s <p> <o>.",                  ErrorKind::Syntax),
    ("bnode property list", "[ <p> <o> ] <p> <o>.",      ErrorKind::Syntax),
    ("collection",      "<s> <p> ( <o> ).",              ErrorKind::Syntax),
    ("a as subject",    "a <p> <o>.",                    ErrorKind::Syntax),
    ("base without IRI", "@base .",                      ErrorKind::Syntax),
    ("base without dot", "@base <x:> <s> <p> <o>.",      ErrorKind::Syntax),
    ("empty list",      "<s> <p> .",                     ErrorKind::Syntax),
    ("malformed",       "<s> <p> <%>.",                  ErrorKind::MalformedIri),
    ("malformed base",  "@base <x y:> .",                ErrorKind::MalformedIri),
];

fn nested_base() -> Option<Iri<String>> {
    Some(Iri::new("app://h/nested/".to_string()).unwrap())
}

#[test]
fn nt_samples() -> Result<(), ParseError> {
    for (name, txt, count) in NT_SAMPLES {
        dbg!(name);
        let mut g = LightGraph::new();
        let c = nt::NTriplesParser::default().parse_into(txt, &mut g)?;
        assert_eq!(c, *count);
    }
    Ok(())
}

#[test]
fn nt_negative() {
    for (name, txt, kind) in NT_NEGATIVE {
        dbg!(name);
        let err = nt::parse_str::<LightGraph>(txt).unwrap_err();
        assert_eq!(err.kind(), *kind);
    }
}

#[test]
fn turtle_samples() -> Result<(), ParseError> {
    for (name, txt, count) in TURTLE_SAMPLES {
        dbg!(name);
        let p = turtle::TurtleParser {
            base: nested_base(),
        };
        let mut g = LightGraph::new();
        let c = p.parse_into(txt, &mut g)?;
        assert_eq!(c, *count);
    }
    Ok(())
}

#[test]
fn turtle_negative() {
    for (name, txt, kind) in TURTLE_NEGATIVE {
        dbg!(name);
        let p = turtle::TurtleParser {
            base: nested_base(),
        };
        let err = p.parse_str::<LightGraph>(txt).unwrap_err();
        assert_eq!(err.kind(), *kind);
    }
}

#[test]
fn turtle_samples_survive_nt_serialization() -> Result<(), Box<dyn std::error::Error>> {
    for (name, txt, _) in TURTLE_SAMPLES {
        dbg!(name);
        let p = turtle::TurtleParser {
            base: nested_base(),
        };
        let g1: LightGraph = p.parse_str(txt)?;
        let nt = NtSerializer::new_stringifier()
            .serialize_graph(&g1)?
            .to_string();
        let g2: LightGraph = nt::parse_str(&nt)?;
        assert_eq!(g1.len(), g2.len());
        assert!(g1.triples().all(|[s, p, o]| g2.contains(&s, &p, &o)));
    }
    Ok(())
}

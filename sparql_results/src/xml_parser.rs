//! Parse XML-formatted SPARQL results.
//!
//! Only the root element is strictly checked.
//! Inside it, elements that are not SPARQL results elements (e.g. `<head>` and `<link>`)
//! are skipped, as are elements from other namespaces.
//! The text of bound values is kept verbatim (no whitespace trimming).

use std::io::BufRead;

use quick_xml::{
    events::{
        BytesStart,
        Event::{CData, Empty, End, Eof, Start, Text},
    },
    name::{Namespace, QName, ResolveResult},
    NsReader,
};
use sparrow_api::document::{Binding, ValueRecord, ValueType};

use crate::{
    ParseError::{self, Structure},
    QueryResults,
};

pub(crate) struct SparqlXmlParser<R: BufRead> {
    events: NsReader<R>,
    buf: Vec<u8>,
}

impl<R: BufRead> SparqlXmlParser<R> {
    pub(crate) fn new(data: R) -> Self {
        let mut events = NsReader::from_reader(data);
        events.config_mut().expand_empty_elements = true;
        Self {
            events,
            buf: vec![],
        }
    }

    pub(crate) fn parse_results_document(&mut self) -> Result<QueryResults, ParseError> {
        let Some(root) = self.next_start()? else {
            return Err(Structure("Expected <sparql>, found no element".into()));
        };
        if self.local_name(&root).as_deref() != Some(&b"sparql"[..]) {
            return Err(Structure(format!(
                "Expected <sparql>, found <{}>",
                String::from_utf8_lossy(root.name().as_ref())
            )));
        }
        let mut rows = vec![];
        let mut boolean = None;
        while let Some(elt) = self.next_start()? {
            match self.local_name(&elt).as_deref() {
                Some(b"results") => self.parse_results(&mut rows)?,
                Some(b"boolean") => boolean = Some(self.parse_boolean()?),
                _ => self.skip(&elt)?,
            }
        }
        match boolean {
            Some(b) if rows.is_empty() => Ok(QueryResults::Boolean(b)),
            _ => Ok(QueryResults::Bindings(rows)),
        }
    }

    fn parse_results(&mut self, rows: &mut Vec<Binding>) -> Result<(), ParseError> {
        while let Some(elt) = self.next_start()? {
            if self.local_name(&elt).as_deref() == Some(&b"result"[..]) {
                rows.push(self.parse_result()?);
            } else {
                self.skip(&elt)?;
            }
        }
        Ok(())
    }

    fn parse_result(&mut self) -> Result<Binding, ParseError> {
        let mut row = Binding::new();
        while let Some(binding) = self.next_start()? {
            if self.local_name(&binding).as_deref() != Some(&b"binding"[..]) {
                self.skip(&binding)?;
                continue;
            }
            let name = self.get_attr(&binding, "name")?;
            let Some(elt) = self.next_start()? else {
                return Err(Structure(format!("No value in <binding name='{name}'>")));
            };
            let record = self.parse_term(&elt, &name)?;
            self.expect_closing(binding.name())?;
            row.insert(name, record);
        }
        Ok(row)
    }

    fn parse_term(
        &mut self,
        start: &BytesStart<'static>,
        name: &str,
    ) -> Result<ValueRecord, ParseError> {
        let kind = self
            .local_name(start)
            .and_then(|local| std::str::from_utf8(&local).ok().and_then(ValueType::from_tag))
            .ok_or_else(|| {
                Structure(format!(
                    "Unrecognized term in <binding name='{}'>: <{}>",
                    name,
                    String::from_utf8_lossy(start.name().as_ref())
                ))
            })?;
        let mut lang = None;
        let mut datatype = None;
        if kind == ValueType::Literal {
            for res in start.attributes() {
                let attr = res?;
                let is_lang = attr.key == QName(b"xml:lang");
                if !is_lang && attr.key != QName(b"datatype") {
                    continue;
                }
                let value = attr.decode_and_unescape_value(self.events.decoder())?;
                // the first annotation wins
                if is_lang {
                    lang = Some(value.into_owned());
                } else {
                    datatype = Some(value.into_owned());
                }
                break;
            }
        }
        let mut value = self.next_text()?;
        if kind == ValueType::Uri {
            // some servers wrap IRIs in angle brackets
            if let Some(stripped) = value.strip_prefix('<') {
                value = stripped.to_string();
            }
            if let Some(stripped) = value.strip_suffix('>') {
                value = stripped.to_string();
            }
        }
        Ok(ValueRecord {
            value,
            kind,
            lang,
            datatype,
        })
    }

    fn parse_boolean(&mut self) -> Result<bool, ParseError> {
        match self.next_text()?.trim() {
            "true" => Ok(true),
            "false" => Ok(false),
            other => Err(Structure(format!("Unrecognized boolean value '{other}'"))),
        }
    }

    /// Return the next start tag before the end of the current element, if any.
    fn next_start(&mut self) -> Result<Option<BytesStart<'static>>, ParseError> {
        loop {
            self.buf.clear();
            match self.events.read_event_into(&mut self.buf)? {
                Start(s) => return Ok(Some(s.into_owned())),
                End(_) | Eof => return Ok(None),
                _ => continue,
            }
        }
    }

    /// Read the text content of the current element, up to its end tag.
    fn next_text(&mut self) -> Result<String, ParseError> {
        let mut value = String::new();
        loop {
            self.buf.clear();
            match self.events.read_event_into(&mut self.buf)? {
                Text(e) => value.push_str(&e.unescape()?),
                CData(e) => value.push_str(
                    std::str::from_utf8(&e).map_err(|e| Structure(format!("Invalid CDATA: {e}")))?,
                ),
                End(_) => return Ok(value),
                Start(_) | Empty(_) => return Err(Structure("Unexpected child in value".into())),
                Eof => return Err(Structure("Unexpected end of document".into())),
                _ => continue,
            }
        }
    }

    fn expect_closing(&mut self, name: QName<'_>) -> Result<(), ParseError> {
        loop {
            self.buf.clear();
            match self.events.read_event_into(&mut self.buf)? {
                End(e) if e.name() == name => return Ok(()),
                Start(_) | Empty(_) | CData(_) | Eof => {
                    return Err(Structure(format!(
                        "Spurious content in <{}>",
                        String::from_utf8_lossy(name.as_ref())
                    )))
                }
                Text(e) => {
                    if !e.unescape()?.trim().is_empty() {
                        return Err(Structure(format!(
                            "Spurious text in <{}>",
                            String::from_utf8_lossy(name.as_ref())
                        )));
                    }
                }
                _ => continue,
            }
        }
    }

    /// Skip the content of `start`, up to and including its end tag.
    fn skip(&mut self, start: &BytesStart<'_>) -> Result<(), ParseError> {
        self.buf.clear();
        self.events.read_to_end_into(start.name(), &mut self.buf)?;
        Ok(())
    }

    fn get_attr(&mut self, start: &BytesStart<'_>, key: &str) -> Result<String, ParseError> {
        let key = QName(key.as_bytes());
        for res in start.attributes() {
            let attr = res?;
            if attr.key == key {
                return Ok(attr
                    .decode_and_unescape_value(self.events.decoder())?
                    .into_owned());
            }
        }
        Err(Structure(format!(
            "Attribute '{}' not found in <{}>",
            String::from_utf8_lossy(key.as_ref()),
            String::from_utf8_lossy(start.name().as_ref())
        )))
    }

    /// The local name of `start` if it belongs to the SPARQL results namespace.
    fn local_name(&self, start: &BytesStart<'_>) -> Option<Vec<u8>> {
        let (ns, local) = self.events.resolve_element(start.name());
        (ns == ResolveResult::Bound(NS)).then(|| local.as_ref().to_vec())
    }
}

const NS: Namespace = Namespace(b"http://www.w3.org/2005/sparql-results#");

// ---------------------------------------------------------------------------------
//                                      tests
// ---------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use crate::decode;
    use test_case::test_case;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    fn bindings(src: &str) -> Result<Vec<Binding>, Box<dyn std::error::Error>> {
        decode(src.as_bytes())?
            .into_bindings()
            .ok_or_else(|| "expected bindings".into())
    }

    #[test]
    fn bindings_doc() -> TestResult {
        let got = bindings(
            r#"<?xml version="1.0"?>
            <sparql xmlns="http://www.w3.org/2005/sparql-results#">
              <head>
                <variable name="a"/>
                <variable name="b"/>
                <variable name="c"/>
              </head>
              <results>
                <result>
                  <binding name="a">
                    <uri>tag:a0</uri>
                  </binding>
                  <binding name="b">
                    <literal>simple</literal>
                  </binding>
                  <binding name="c">
                    <bnode>bn0</bnode>
                  </binding>
                </result>
                <result>
                  <binding name="c">
                    <literal datatype="tag:d1">datatype</literal>
                  </binding>
                  <binding name="a">
                    <literal xml:lang="en">lang</literal>
                  </binding>
                </result>
              </results>
            </sparql>
        "#,
        )?;
        let exp = vec![
            Binding::from([
                ("a".to_string(), ValueRecord::uri("tag:a0")),
                ("b".to_string(), ValueRecord::literal("simple")),
                ("c".to_string(), ValueRecord::bnode("bn0")),
            ]),
            Binding::from([
                (
                    "c".to_string(),
                    ValueRecord::literal("datatype").with_datatype("tag:d1"),
                ),
                ("a".to_string(), ValueRecord::literal("lang").with_lang("en")),
            ]),
        ];
        assert_eq!(got, exp);
        Ok(())
    }

    #[test_case("true", true)]
    #[test_case("false", false)]
    #[test_case(" true\n", true ; "surrounding whitespace")]
    fn boolean_doc(txt: &str, exp: bool) -> TestResult {
        let src = format!(
            r#"<?xml version="1.0"?>
            <sparql xmlns="http://www.w3.org/2005/sparql-results#">
              <head>
                <link href="https://example.org" />
              </head>
              <boolean>{txt}</boolean>
            </sparql>"#
        );
        assert_eq!(decode(src.as_bytes())?, QueryResults::Boolean(exp));
        Ok(())
    }

    #[test]
    fn angle_brackets_are_stripped_from_uris() -> TestResult {
        let got = bindings(
            r#"<sparql xmlns="http://www.w3.org/2005/sparql-results#"><results><result>
            <binding name="g"><uri>&lt;http://example.org/graph&gt;</uri></binding>
            </result></results></sparql>"#,
        )?;
        assert_eq!(got[0]["g"], ValueRecord::uri("http://example.org/graph"));
        Ok(())
    }

    #[test]
    fn literal_text_is_kept_verbatim() -> TestResult {
        let got = bindings(
            r#"<s:sparql xmlns:s="http://www.w3.org/2005/sparql-results#"><s:results><s:result>
            <s:binding name="x"><s:literal>  a &amp; b
</s:literal></s:binding>
            <s:binding name="y"><s:literal/></s:binding>
            <s:binding name="z"><s:literal><![CDATA[<raw>]]></s:literal></s:binding>
            </s:result></s:results></s:sparql>"#,
        )?;
        assert_eq!(got[0]["x"], ValueRecord::literal("  a & b\n"));
        assert_eq!(got[0]["y"], ValueRecord::literal(""));
        assert_eq!(got[0]["z"], ValueRecord::literal("<raw>"));
        Ok(())
    }

    #[test]
    fn first_annotation_wins() -> TestResult {
        let got = bindings(
            r#"<sparql xmlns="http://www.w3.org/2005/sparql-results#"><results><result>
            <binding name="x"><literal datatype="tag:dt" xml:lang="en">v</literal></binding>
            </result></results></sparql>"#,
        )?;
        assert_eq!(got[0]["x"], ValueRecord::literal("v").with_datatype("tag:dt"));
        Ok(())
    }

    #[test_case(r#"<sparql xmlns="http://www.w3.org/2005/sparql-results#"><head/><results/></sparql>"# ; "no result")]
    #[test_case(r#"<sparql xmlns="http://www.w3.org/2005/sparql-results#"><head/></sparql>"# ; "neither results nor boolean")]
    fn empty_bindings(src: &str) -> TestResult {
        assert_eq!(decode(src.as_bytes())?, QueryResults::Bindings(vec![]));
        Ok(())
    }

    #[test]
    fn foreign_elements_are_skipped() -> TestResult {
        let got = bindings(
            r#"<sparql xmlns="http://www.w3.org/2005/sparql-results#" xmlns:x="tag:x">
            <x:extra><result><binding name="no"><uri>tag:no</uri></binding></result></x:extra>
            <results><result><x:note>ignored</x:note>
              <binding name="yes"><uri>tag:yes</uri></binding>
            </result></results></sparql>"#,
        )?;
        assert_eq!(got, vec![Binding::from([("yes".to_string(), ValueRecord::uri("tag:yes"))])]);
        Ok(())
    }

    #[test_case("" ; "empty document")]
    #[test_case("<html/>" ; "wrong root")]
    #[test_case(r#"<sparql xmlns="tag:other"><boolean>true</boolean></sparql>"# ; "wrong namespace")]
    #[test_case(r#"<sparql xmlns="http://www.w3.org/2005/sparql-results#"><boolean>yes</boolean></sparql>"# ; "bad boolean")]
    #[test_case(r#"<sparql xmlns="http://www.w3.org/2005/sparql-results#"><results><result><binding name="x"></binding></result></results></sparql>"# ; "binding without value")]
    #[test_case(r#"<sparql xmlns="http://www.w3.org/2005/sparql-results#"><results><result><binding name="x"><triple/></binding></result></results></sparql>"# ; "unknown term")]
    #[test_case(r#"<sparql xmlns="http://www.w3.org/2005/sparql-results#"><results><result><binding><uri>tag:a</uri></binding></result></results></sparql>"# ; "binding without name")]
    fn structure_error(src: &str) {
        assert!(matches!(decode(src.as_bytes()), Err(ParseError::Structure(_))));
    }

    #[test]
    fn malformed_xml() {
        let src = r#"<sparql xmlns="http://www.w3.org/2005/sparql-results#"><results></sparql>"#;
        assert!(matches!(decode(src.as_bytes()), Err(ParseError::Xml(_))));
    }
}

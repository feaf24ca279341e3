//! Syntax-tree extractor built on swc.
//!
//! Finds the same three kinds of text as the pattern extractor, but from a
//! parsed TSX module instead of raw text, so markup inside strings or
//! comments is never mistaken for JSX.

use anyhow::{Context, Result};
use swc_common::{BytePos, SourceMap, Spanned};
use swc_ecma_ast::{
    Expr, JSXAttr, JSXAttrName, JSXAttrValue, JSXText, KeyValueProp, Lit, PropName,
};
use swc_ecma_visit::{Visit, VisitWith};

use super::{Extractor, ExtractorOptions};
use crate::core::candidate::{Candidate, OriginKind};
use crate::core::parsers::jsx::parse_jsx_source;
use crate::utils::contains_alphabetic;

pub struct AstExtractor {
    options: ExtractorOptions,
}

impl AstExtractor {
    pub fn new(options: &ExtractorOptions) -> Self {
        Self {
            options: options.clone(),
        }
    }
}

impl Extractor for AstExtractor {
    fn scan(&self, source: &str) -> Result<Vec<Candidate>> {
        let parsed = parse_jsx_source(source).context("Source is not valid TSX")?;

        let mut visitor = CandidateVisitor::new(&parsed.source_map, &self.options);
        parsed.module.visit_with(&mut visitor);

        Ok(visitor.finish())
    }
}

/// Collects candidates per origin kind so the result can be ordered the same
/// way as the pattern passes.
struct CandidateVisitor<'a> {
    source_map: &'a SourceMap,
    options: &'a ExtractorOptions,
    jsx_text: Vec<Candidate>,
    attribute_values: Vec<Candidate>,
    message_literals: Vec<Candidate>,
}

impl<'a> CandidateVisitor<'a> {
    fn new(source_map: &'a SourceMap, options: &'a ExtractorOptions) -> Self {
        Self {
            source_map,
            options,
            jsx_text: Vec::new(),
            attribute_values: Vec::new(),
            message_literals: Vec::new(),
        }
    }

    fn finish(self) -> Vec<Candidate> {
        let mut all = self.jsx_text;
        all.extend(self.attribute_values);
        all.extend(self.message_literals);
        all
    }

    fn line(&self, pos: BytePos) -> usize {
        self.source_map.lookup_char_pos(pos).line
    }
}

impl Visit for CandidateVisitor<'_> {
    fn visit_jsx_text(&mut self, node: &JSXText) {
        let raw_value = &node.value;
        let trimmed = raw_value.trim();

        if trimmed.is_empty() || !contains_alphabetic(trimmed) {
            return;
        }

        let trim_start_offset = raw_value.len() - raw_value.trim_start().len();
        let actual_pos = node.span.lo + BytePos(trim_start_offset as u32);
        let line = self.line(actual_pos);

        self.jsx_text
            .push(Candidate::new(trimmed, OriginKind::JsxText, line));
    }

    fn visit_jsx_attr(&mut self, node: &JSXAttr) {
        let attr_name = match &node.name {
            JSXAttrName::Ident(ident) => ident.sym.to_string(),
            JSXAttrName::JSXNamespacedName(ns) => {
                format!("{}-{}", ns.ns.sym, ns.name.sym)
            }
        };

        if self.options.checked_attributes.contains(&attr_name)
            && let Some(JSXAttrValue::Str(s)) = &node.value
            && let Some(value) = s.value.as_str()
        {
            let line = self.line(node.span.lo);
            self.attribute_values
                .push(Candidate::new(value.trim(), OriginKind::AttributeValue, line));
        }

        node.visit_children_with(self);
    }

    fn visit_key_value_prop(&mut self, node: &KeyValueProp) {
        if let Some(key) = prop_name(&node.key)
            && self.options.message_keys.contains(&key)
            && let Expr::Lit(Lit::Str(s)) = &*node.value
            && let Some(value) = s.value.as_str()
        {
            let line = self.line(node.key.span().lo);
            self.message_literals
                .push(Candidate::new(value.trim(), OriginKind::MessageLiteral, line));
        }

        node.visit_children_with(self);
    }
}

fn prop_name(key: &PropName) -> Option<String> {
    match key {
        PropName::Ident(ident) => Some(ident.sym.to_string()),
        PropName::Str(s) => s.value.as_str().map(|s| s.to_string()),
        _ => None,
    }
}

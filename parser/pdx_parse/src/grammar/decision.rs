//! Decision-file grammar.
//!
//! A decision file mixes `political_decisions = { ... }` groups with
//! plain assignments. Each decision inside a group is
//! `<name> = { ... }` whose well-known keys (`potential`, `allow`,
//! `effect`, `ai_will_do`) may each occur at most once and must take a
//! block.

use bitflags::bitflags;
use pdx_ir::{Node, NodeId};

use super::{ScriptParser, ValueShape};
use crate::chars::is_ident_char;
use crate::recovery::skip_to_balanced_brace;

const PROD_DECISION_FILE: &str = "DecisionFile";
const PROD_DECISION_LIST: &str = "DecisionList";
const PROD_DECISION: &str = "DecisionStatement";
const PROD_SIMPLE_ASSIGNMENT: &str = "SimpleAssignmentStatement";

bitflags! {
    /// Once-only keys of a decision block.
    #[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
    struct DecisionKeys: u8 {
        const POTENTIAL = 1 << 0;
        const ALLOW = 1 << 1;
        const EFFECT = 1 << 2;
        const AI_WILL_DO = 1 << 3;
    }
}

fn decision_key(name: &str) -> Option<DecisionKeys> {
    match name {
        "potential" => Some(DecisionKeys::POTENTIAL),
        "allow" => Some(DecisionKeys::ALLOW),
        "effect" => Some(DecisionKeys::EFFECT),
        "ai_will_do" => Some(DecisionKeys::AI_WILL_DO),
        _ => None,
    }
}

impl ScriptParser<'_> {
    /// `DecisionFile ::= (DecisionList | SimpleAssignmentStatement)* EOF`.
    pub(crate) fn parse_decision_file(&mut self) -> NodeId {
        let start = self.cursor.pos();
        let mut statements = Vec::new();
        self.skip_trivia();
        while !self.cursor.is_eof() {
            let before = self.cursor.pos();
            let statement = match self.cursor.peek() {
                Some(c) if is_ident_char(c) => {
                    if self.peek_identifier() == "political_decisions" {
                        self.parse_decision_list()
                    } else {
                        self.parse_simple_assignment(PROD_SIMPLE_ASSIGNMENT)
                    }
                }
                Some(c) => {
                    let at = self.loc(before..before + c.len_utf8());
                    self.sink
                        .expected_keyword(PROD_DECISION_FILE, at, "political_decisions");
                    skip_to_balanced_brace(&mut self.cursor);
                    None
                }
                None => None,
            };
            if let Some(statement) = statement {
                statements.push(statement);
            }
            if self.cursor.pos() == before {
                self.cursor.bump();
            }
            self.skip_trivia();
        }
        let end = self.cursor.pos();
        let root = self.alloc(Node::FileTree(statements), start..end);
        self.ast.set_root(root);
        root
    }

    /// `political_decisions = { DecisionStatement* }`.
    fn parse_decision_list(&mut self) -> Option<NodeId> {
        let start = self.cursor.pos();
        let left = self.parse_identifier_node();
        self.skip_trivia();
        if !self.cursor.eat('=') {
            let at = self.point(self.cursor.pos());
            self.sink.expected_literal(PROD_DECISION_LIST, at, "=");
            skip_to_balanced_brace(&mut self.cursor);
            return None;
        }
        self.skip_trivia();
        if self.cursor.peek() != Some('{') {
            let at = self.current_char_loc();
            self.sink.expected_literal(PROD_DECISION_LIST, at, "{");
            skip_to_balanced_brace(&mut self.cursor);
            return None;
        }

        let right =
            self.parse_list_with(PROD_DECISION_LIST, ScriptParser::parse_decision_statement);
        let end = self.cursor.pos();
        Some(self.alloc(Node::AssignStatement { left, right }, start..end))
    }

    /// `<name> = { potential/allow/effect/ai_will_do once each, plus
    /// plain assignments }`.
    fn parse_decision_statement(&mut self) -> Option<NodeId> {
        let start = self.cursor.pos();
        match self.cursor.peek() {
            Some(c) if is_ident_char(c) => {}
            _ => return self.parse_simple_assignment(PROD_DECISION),
        }
        let left = self.parse_identifier_node();
        self.skip_trivia();
        if !self.cursor.eat('=') {
            let at = self.point(self.cursor.pos());
            self.sink.expected_literal(PROD_DECISION, at, "=");
            skip_to_balanced_brace(&mut self.cursor);
            return None;
        }
        self.skip_trivia();
        if self.cursor.peek() != Some('{') {
            let at = self.current_char_loc();
            self.sink.expected_literal(PROD_DECISION, at, "{");
            skip_to_balanced_brace(&mut self.cursor);
            return None;
        }

        let mut seen = DecisionKeys::empty();
        let right = self.parse_list_with(PROD_DECISION, move |parser| {
            parser.parse_decision_key_statement(&mut seen)
        });
        let end = self.cursor.pos();
        Some(self.alloc(Node::AssignStatement { left, right }, start..end))
    }

    fn parse_decision_key_statement(&mut self, seen: &mut DecisionKeys) -> Option<NodeId> {
        let start = self.cursor.pos();
        match self.cursor.peek() {
            Some(c) if is_ident_char(c) => {}
            _ => return self.parse_simple_assignment(PROD_DECISION),
        }

        let name = self.peek_identifier().to_string();
        let key = decision_key(&name);
        let left = self.parse_identifier_node();
        let key_range = start..self.cursor.pos();

        if let Some(flag) = key {
            if seen.contains(flag) {
                let at = self.loc(key_range.clone());
                self.sink.duplicate_key(PROD_DECISION, at, &name);
            }
            seen.insert(flag);
        }

        self.skip_trivia();
        if !self.cursor.eat('=') {
            let at = self.point(self.cursor.pos());
            self.sink.expected_literal(PROD_DECISION, at, "=");
            skip_to_balanced_brace(&mut self.cursor);
            return None;
        }
        self.skip_trivia();

        let right = if key.is_some() {
            self.parse_shaped_value(PROD_DECISION, ValueShape::Block)
        } else {
            self.parse_value()
        }?;

        let end = self.cursor.pos();
        Some(self.alloc(Node::AssignStatement { left, right }, start..end))
    }
}

//! Event-file grammar.
//!
//! An event file is a list of `country_event = { ... }` /
//! `province_event = { ... }` statements mixed with plain assignments.
//! Inside an event block the well-known keys may each occur at most
//! once; a repeat is a recoverable duplicate-key error. An event's
//! right-hand side must be a block; anything else is rejected.

use bitflags::bitflags;
use pdx_ir::{Node, NodeId};

use super::{ScriptParser, ValueShape};
use crate::chars::is_ident_char;
use crate::recovery::skip_to_balanced_brace;

const PROD_EVENT_FILE: &str = "EventFile";
const PROD_EVENT: &str = "EventStatement";
const PROD_OPTION: &str = "EventOptionList";
const PROD_SIMPLE_ASSIGNMENT: &str = "SimpleAssignmentStatement";

bitflags! {
    /// Once-only keys of an event block.
    #[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
    struct EventKeys: u16 {
        const ID = 1 << 0;
        const TITLE = 1 << 1;
        const DESC = 1 << 2;
        const PICTURE = 1 << 3;
        const IS_TRIGGERED_ONLY = 1 << 4;
        const FIRE_ONLY_ONCE = 1 << 5;
        const IMMEDIATE = 1 << 6;
        const MEAN_TIME_TO_HAPPEN = 1 << 7;
        const TRIGGER = 1 << 8;
        const OPTION = 1 << 9;
    }
}

bitflags! {
    /// Once-only keys of an `option` block.
    #[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
    struct OptionKeys: u8 {
        const NAME = 1 << 0;
        const AI_CHANCE = 1 << 1;
    }
}

fn event_key(name: &str) -> Option<(EventKeys, ValueShape)> {
    Some(match name {
        "id" => (EventKeys::ID, ValueShape::Flat),
        "title" => (EventKeys::TITLE, ValueShape::Flat),
        "desc" => (EventKeys::DESC, ValueShape::Flat),
        "picture" => (EventKeys::PICTURE, ValueShape::Flat),
        "is_triggered_only" => (EventKeys::IS_TRIGGERED_ONLY, ValueShape::Flat),
        "fire_only_once" => (EventKeys::FIRE_ONLY_ONCE, ValueShape::Flat),
        "immediate" => (EventKeys::IMMEDIATE, ValueShape::Block),
        "mean_time_to_happen" => (EventKeys::MEAN_TIME_TO_HAPPEN, ValueShape::Block),
        "trigger" => (EventKeys::TRIGGER, ValueShape::Block),
        "option" => (EventKeys::OPTION, ValueShape::Block),
        _ => return None,
    })
}

fn option_key(name: &str) -> Option<(OptionKeys, ValueShape)> {
    Some(match name {
        "name" => (OptionKeys::NAME, ValueShape::Flat),
        "ai_chance" => (OptionKeys::AI_CHANCE, ValueShape::Block),
        _ => return None,
    })
}

impl ScriptParser<'_> {
    /// `EventFile ::= (EventStatement | SimpleAssignmentStatement)* EOF`.
    pub(crate) fn parse_event_file(&mut self) -> NodeId {
        let start = self.cursor.pos();
        let mut statements = Vec::new();
        self.skip_trivia();
        while !self.cursor.is_eof() {
            let before = self.cursor.pos();
            let statement = match self.cursor.peek() {
                Some(c) if is_ident_char(c) => match self.peek_identifier() {
                    "country_event" => self.parse_event_statement(false),
                    "province_event" => self.parse_event_statement(true),
                    _ => self.parse_simple_assignment(PROD_SIMPLE_ASSIGNMENT),
                },
                Some(c) => {
                    let at = self.loc(before..before + c.len_utf8());
                    self.sink
                        .expected_keyword(PROD_EVENT_FILE, at, "country_event");
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

    /// One `country_event = { ... }` / `province_event = { ... }`.
    fn parse_event_statement(&mut self, is_province_event: bool) -> Option<NodeId> {
        let start = self.cursor.pos();
        self.cursor.eat_while(is_ident_char);
        self.skip_trivia();
        if !self.cursor.eat('=') {
            let at = self.point(self.cursor.pos());
            self.sink.expected_literal(PROD_EVENT, at, "=");
            skip_to_balanced_brace(&mut self.cursor);
            return None;
        }
        self.skip_trivia();
        if self.cursor.peek() != Some('{') {
            // Non-block event bodies are rejected outright.
            let at = self.current_char_loc();
            self.sink.expected_literal(PROD_EVENT, at, "{");
            skip_to_balanced_brace(&mut self.cursor);
            return None;
        }

        let body = self.parse_event_body();
        let end = self.cursor.pos();
        Some(self.alloc(
            Node::EventStatement {
                is_province_event,
                body,
            },
            start..end,
        ))
    }

    fn parse_event_body(&mut self) -> NodeId {
        let mut seen = EventKeys::empty();
        self.parse_list_with(PROD_EVENT, move |parser| {
            parser.parse_event_key_statement(&mut seen)
        })
    }

    fn parse_event_key_statement(&mut self, seen: &mut EventKeys) -> Option<NodeId> {
        let start = self.cursor.pos();
        match self.cursor.peek() {
            Some(c) if is_ident_char(c) => {}
            _ => return self.parse_simple_assignment(PROD_EVENT),
        }

        let name = self.peek_identifier().to_string();
        let key = event_key(&name);
        let left = self.parse_identifier_node();
        let key_range = start..self.cursor.pos();

        if let Some((flag, _)) = key {
            if seen.contains(flag) {
                let at = self.loc(key_range.clone());
                self.sink.duplicate_key(PROD_EVENT, at, &name);
            }
            seen.insert(flag);
        }

        self.skip_trivia();
        if !self.cursor.eat('=') {
            let at = self.point(self.cursor.pos());
            self.sink.expected_literal(PROD_EVENT, at, "=");
            skip_to_balanced_brace(&mut self.cursor);
            return None;
        }
        self.skip_trivia();

        let right = if name == "option" {
            if self.cursor.peek() == Some('{') {
                Some(self.parse_option_body())
            } else {
                let at = self.current_char_loc();
                self.sink.expected_literal(PROD_OPTION, at, "{");
                skip_to_balanced_brace(&mut self.cursor);
                None
            }
        } else {
            match key {
                Some((_, shape)) => self.parse_shaped_value(PROD_EVENT, shape),
                None => self.parse_value(),
            }
        }?;

        let end = self.cursor.pos();
        Some(self.alloc(Node::AssignStatement { left, right }, start..end))
    }

    /// `option = { ... }` body with its own once-only keys.
    fn parse_option_body(&mut self) -> NodeId {
        let mut seen = OptionKeys::empty();
        self.parse_list_with(PROD_OPTION, move |parser| {
            parser.parse_option_key_statement(&mut seen)
        })
    }

    fn parse_option_key_statement(&mut self, seen: &mut OptionKeys) -> Option<NodeId> {
        let start = self.cursor.pos();
        match self.cursor.peek() {
            Some(c) if is_ident_char(c) => {}
            _ => return self.parse_simple_assignment(PROD_OPTION),
        }

        let name = self.peek_identifier().to_string();
        let key = option_key(&name);
        let left = self.parse_identifier_node();
        let key_range = start..self.cursor.pos();

        if let Some((flag, _)) = key {
            if seen.contains(flag) {
                let at = self.loc(key_range.clone());
                self.sink.duplicate_key(PROD_OPTION, at, &name);
            }
            seen.insert(flag);
        }

        self.skip_trivia();
        if !self.cursor.eat('=') {
            let at = self.point(self.cursor.pos());
            self.sink.expected_literal(PROD_OPTION, at, "=");
            skip_to_balanced_brace(&mut self.cursor);
            return None;
        }
        self.skip_trivia();

        let right = match key {
            Some((_, shape)) => self.parse_shaped_value(PROD_OPTION, shape),
            None => self.parse_value(),
        }?;

        let end = self.cursor.pos();
        Some(self.alloc(Node::AssignStatement { left, right }, start..end))
    }
}

//! Lua-defines grammar.
//!
//! The defines files are a thin Lua subset: `NAME = value` assignments,
//! nested `{ ... }` tables with comma separators (trailing comma
//! tolerated), numeric values, single- or double-quoted strings, and
//! `--` line comments. Only assignments appear at statement position.

use pdx_ir::{Node, NodeId};

use super::ScriptParser;
use crate::chars::{is_lua_ident_char, is_lua_ident_start, is_lua_value_char};
use crate::recovery::skip_to_balanced_brace;

const PROD_LUA_ASSIGNMENT: &str = "LuaAssignmentStatement";
const PROD_LUA_BLOCK: &str = "LuaStatementListBlock";
const PROD_LUA_EXPR: &str = "LuaExpression";

impl ScriptParser<'_> {
    /// Skip whitespace and `--` line comments.
    fn skip_lua_trivia(&mut self) {
        loop {
            self.cursor.eat_while(|c| c.is_ascii_whitespace());
            if self.cursor.starts_with("--") {
                self.cursor.eat_while(|c| c != '\n');
            } else {
                break;
            }
        }
    }

    /// `LuaFile ::= (Assignment ","?)* EOF`.
    pub(crate) fn parse_lua_file(&mut self) -> NodeId {
        let start = self.cursor.pos();
        let mut statements = Vec::new();
        self.skip_lua_trivia();
        while !self.cursor.is_eof() {
            let before = self.cursor.pos();
            if let Some(statement) = self.parse_lua_assignment() {
                statements.push(statement);
            }
            if self.cursor.pos() == before {
                self.cursor.bump();
            }
            self.skip_lua_trivia();
            if self.cursor.eat(',') {
                self.skip_lua_trivia();
            }
        }
        let end = self.cursor.pos();
        let root = self.alloc(Node::FileTree(statements), start..end);
        self.ast.set_root(root);
        root
    }

    fn parse_lua_assignment(&mut self) -> Option<NodeId> {
        let start = self.cursor.pos();
        match self.cursor.peek() {
            Some(c) if is_lua_ident_start(c) => {}
            Some(c) => {
                let at = self.loc(start..start + c.len_utf8());
                self.sink
                    .expected_char_class(PROD_LUA_ASSIGNMENT, at, "identifier");
                skip_to_balanced_brace(&mut self.cursor);
                return None;
            }
            None => return None,
        }

        let ident_start = self.cursor.pos();
        let text = self.cursor.eat_while(is_lua_ident_char);
        let symbol = self.intern(text);
        let left = self.alloc(
            Node::IdentifierValue(symbol),
            ident_start..self.cursor.pos(),
        );

        self.skip_lua_trivia();
        if !self.cursor.eat('=') {
            let at = self.point(self.cursor.pos());
            self.sink.expected_literal(PROD_LUA_ASSIGNMENT, at, "=");
            skip_to_balanced_brace(&mut self.cursor);
            return None;
        }
        self.skip_lua_trivia();

        let right = self.parse_lua_expression()?;
        let end = self.cursor.pos();
        Some(self.alloc(Node::AssignStatement { left, right }, start..end))
    }

    /// `LuaExpression ::= Number | String | Block`.
    fn parse_lua_expression(&mut self) -> Option<NodeId> {
        match self.cursor.peek() {
            Some('{') => Some(self.parse_lua_block()),
            Some(quote @ ('"' | '\'')) => self.parse_lua_string(quote),
            Some(c) if is_lua_value_char(c) => {
                let start = self.cursor.pos();
                let text = self.cursor.eat_while(is_lua_value_char);
                let symbol = self.intern(text);
                Some(self.alloc(Node::IdentifierValue(symbol), start..self.cursor.pos()))
            }
            _ => {
                let at = self.current_char_loc();
                self.sink
                    .expected_char_class(PROD_LUA_EXPR, at, "value, string, or table");
                skip_to_balanced_brace(&mut self.cursor);
                None
            }
        }
    }

    /// `{ (Assignment ","?)* ","? }` with the trailing comma tolerated.
    fn parse_lua_block(&mut self) -> NodeId {
        let open = self.cursor.pos();
        self.cursor.bump();
        let mut statements = Vec::new();
        loop {
            self.skip_lua_trivia();
            match self.cursor.peek() {
                None => {
                    let at = self.point(self.cursor.pos());
                    let context = self.loc(open..open + 1);
                    self.sink.expected_literal_with_context(
                        PROD_LUA_BLOCK,
                        at,
                        "}",
                        context,
                        "table opened here",
                    );
                    break;
                }
                Some('}') => {
                    self.cursor.bump();
                    break;
                }
                Some(',') => {
                    self.cursor.bump();
                }
                Some(_) => {
                    let before = self.cursor.pos();
                    if let Some(statement) = self.parse_lua_assignment() {
                        statements.push(statement);
                    }
                    if self.cursor.pos() == before {
                        self.cursor.bump();
                    }
                }
            }
        }
        self.alloc(Node::ListValue(statements), open..self.cursor.pos())
    }

    /// Quoted string without escape processing; control characters are
    /// not allowed inside.
    fn parse_lua_string(&mut self, quote: char) -> Option<NodeId> {
        let start = self.cursor.pos();
        self.cursor.bump();
        let mut content = String::new();
        loop {
            match self.cursor.peek() {
                None => {
                    let at = self.point(self.cursor.pos());
                    self.sink
                        .expected_literal(PROD_LUA_EXPR, at, &quote.to_string());
                    return None;
                }
                Some(c) if c == quote => {
                    self.cursor.bump();
                    break;
                }
                Some(c) if c.is_control() => {
                    let at = self.point(self.cursor.pos());
                    self.sink
                        .expected_literal(PROD_LUA_EXPR, at, &quote.to_string());
                    return None;
                }
                Some(c) => {
                    content.push(c);
                    self.cursor.bump();
                }
            }
        }
        let symbol = self.intern(&content);
        Some(self.alloc(Node::StringValue(symbol), start..self.cursor.pos()))
    }
}

//! Informal type hints found in doc comments.
//!
//! [`DocBlock`] locates the tags (`@var`, `@param`, `@return`, `@template`)
//! and [`parse_type`] turns the hint text into the same [`TypeExpr`] that
//! declared types produce, so downstream code never cares where a type
//! came from.
//!
//! Supported hint shapes:
//!
//! ```text
//! A|B   ?A   A[]   A[][]   (A|B)[]   Generic<A>   Generic<A[]>
//! array<T>   list<T>   array<K, V>   \Namespaced\Name
//! ```

use dtogen_ir::{SingleType, TypeExpr};
use dtogen_syntax::short_name;
use thiserror::Error;

/// A hint that could not be parsed. Callers degrade to `mixed`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed type hint '{hint}': {reason}")]
pub struct HintError {
    pub hint: String,
    pub reason: String,
}

/// Parse a type hint such as `(int|string|null)[]`.
pub fn parse_type(hint: &str) -> Result<TypeExpr, HintError> {
    let fail = |reason: &str| HintError {
        hint: hint.to_string(),
        reason: reason.to_string(),
    };

    let tokens = tokenize(hint).map_err(|reason| fail(&reason))?;
    if tokens.is_empty() {
        return Err(fail("empty hint"));
    }

    let mut parser = Parser { tokens, pos: 0 };
    let ty = parser.union().map_err(|reason| fail(&reason))?;
    if parser.pos != parser.tokens.len() {
        return Err(fail("unexpected trailing input"));
    }
    Ok(ty)
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Name(String),
    Pipe,
    Question,
    Comma,
    OpenParen,
    CloseParen,
    OpenAngle,
    CloseAngle,
    Brackets,
}

fn tokenize(hint: &str) -> Result<Vec<Token>, String> {
    let chars: Vec<char> = hint.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let token = match c {
            c if c.is_whitespace() => {
                i += 1;
                continue;
            }
            '|' => Token::Pipe,
            '?' => Token::Question,
            ',' => Token::Comma,
            '(' => Token::OpenParen,
            ')' => Token::CloseParen,
            '<' => Token::OpenAngle,
            '>' => Token::CloseAngle,
            '[' => {
                if chars.get(i + 1) != Some(&']') {
                    return Err("expected ']'".into());
                }
                i += 1;
                Token::Brackets
            }
            c if is_name_start(c) => {
                let start = i;
                while i + 1 < chars.len() && is_name_char(chars[i + 1]) {
                    i += 1;
                }
                Token::Name(chars[start..=i].iter().collect())
            }
            other => return Err(format!("unexpected character '{other}'")),
        };
        tokens.push(token);
        i += 1;
    }

    Ok(tokens)
}

fn is_name_start(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '\\'
}

fn is_name_char(c: char) -> bool {
    is_name_start(c) || c == '-'
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn eat(&mut self, token: &Token) -> bool {
        if self.peek() == Some(token) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, token: &Token, what: &str) -> Result<(), String> {
        if self.eat(token) {
            Ok(())
        } else {
            Err(format!("expected {what}"))
        }
    }

    fn union(&mut self) -> Result<TypeExpr, String> {
        let mut members = vec![self.prefixed()?];
        while self.eat(&Token::Pipe) {
            members.push(self.prefixed()?);
        }
        Ok(TypeExpr::union(members))
    }

    fn prefixed(&mut self) -> Result<TypeExpr, String> {
        if self.eat(&Token::Question) {
            Ok(TypeExpr::nullable(self.postfix()?))
        } else {
            self.postfix()
        }
    }

    fn postfix(&mut self) -> Result<TypeExpr, String> {
        let mut ty = self.primary()?;
        while self.eat(&Token::Brackets) {
            ty = TypeExpr::array_of(ty);
        }
        Ok(ty)
    }

    fn primary(&mut self) -> Result<TypeExpr, String> {
        if self.eat(&Token::OpenParen) {
            let inner = self.union()?;
            self.expect(&Token::CloseParen, "')'")?;
            return Ok(inner);
        }

        let name = match self.peek() {
            Some(Token::Name(name)) => normalize_name(name),
            Some(_) => return Err("expected a type name".into()),
            None => return Err("unexpected end of hint".into()),
        };
        self.pos += 1;

        if !self.eat(&Token::OpenAngle) {
            return Ok(TypeExpr::single(name));
        }

        let mut args = vec![self.union()?];
        while self.eat(&Token::Comma) {
            args.push(self.union()?);
        }
        self.expect(&Token::CloseAngle, "'>'")?;

        if is_array_like(&name) {
            // array<V> and array<K, V> both describe a list of V
            if args.len() > 2 {
                return Err(format!("{name} takes at most two type arguments"));
            }
            return args
                .pop()
                .map(TypeExpr::array_of)
                .ok_or_else(|| format!("{name} needs a type argument"));
        }

        Ok(SingleType::generic(name, args).into())
    }
}

fn is_array_like(name: &str) -> bool {
    matches!(
        name.to_ascii_lowercase().as_str(),
        "array" | "list" | "iterable" | "non-empty-array" | "non-empty-list"
    )
}

/// Strip namespaces and fold pseudo-types onto their base primitive.
fn normalize_name(name: &str) -> String {
    let name = short_name(name);
    match name.to_ascii_lowercase().as_str() {
        "non-empty-string" | "class-string" | "numeric-string" | "lowercase-string" => {
            "string".into()
        }
        "positive-int" | "negative-int" | "non-negative-int" | "non-positive-int" => "int".into(),
        "non-empty-array" | "non-empty-list" | "list" => "array".into(),
        _ => name.to_string(),
    }
}

/// Tag lookup over a doc comment.
#[derive(Debug, Clone)]
pub struct DocBlock<'a> {
    lines: Vec<&'a str>,
}

impl<'a> DocBlock<'a> {
    pub fn parse(doc: &'a str) -> Self {
        let lines = doc
            .lines()
            .map(|line| {
                let line = line.trim();
                let line = line.strip_prefix("/**").unwrap_or(line);
                let line = line.strip_suffix("*/").unwrap_or(line).trim();
                line.strip_prefix('*').unwrap_or(line).trim()
            })
            .filter(|line| line.starts_with('@'))
            .collect();
        Self { lines }
    }

    /// Type of a `@var` tag.
    pub fn var(&self) -> Option<&'a str> {
        self.tag("@var").map(|rest| take_type(rest).0)
    }

    /// Type of the return value.
    pub fn return_type(&self) -> Option<&'a str> {
        self.tag("@return").map(|rest| take_type(rest).0)
    }

    /// Type of a `@param` tag naming `$name`.
    pub fn param(&self, name: &str) -> Option<&'a str> {
        self.tags("@param").find_map(|rest| {
            let (ty, tail) = take_type(rest);
            let param = tail.split_whitespace().next()?;
            let param = param.trim_start_matches("...").strip_prefix('$')?;
            (param == name).then_some(ty)
        })
    }

    /// Name of the formal parameter declared with `@template`.
    pub fn template(&self) -> Option<&'a str> {
        self.tag("@template")
            .and_then(|rest| rest.split_whitespace().next())
    }

    fn tag(&self, tag: &'static str) -> Option<&'a str> {
        self.tags(tag).next()
    }

    fn tags(&self, tag: &'static str) -> impl Iterator<Item = &'a str> + '_ {
        self.lines.iter().copied().filter_map(move |line: &'a str| {
            let rest = line.strip_prefix(tag)?;
            // `@param` must not match `@parameter`
            if rest.starts_with(char::is_whitespace) {
                Some(rest.trim_start())
            } else {
                None
            }
        })
    }
}

/// Split the leading type expression off a tag body.
///
/// Whitespace ends the type only outside brackets and not next to `|`,
/// so `array<string, int>` and `A | B` stay whole.
fn take_type(rest: &str) -> (&str, &str) {
    let mut depth = 0usize;

    for (i, c) in rest.char_indices() {
        match c {
            '<' | '(' => depth += 1,
            '>' | ')' => depth = depth.saturating_sub(1),
            c if c.is_whitespace() && depth == 0 => {
                let before = rest[..i].trim_end();
                let after = rest[i..].trim_start();
                if before.ends_with('|') || after.starts_with('|') {
                    continue;
                }
                return (&rest[..i], &rest[i..]);
            }
            _ => {}
        }
    }

    (rest, "")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(hint: &str) -> TypeExpr {
        parse_type(hint).unwrap()
    }

    #[test]
    fn test_union_dedupes() {
        let ty = parse("A|null|A");
        assert_eq!(ty, TypeExpr::nullable(TypeExpr::single("A")));
        assert_eq!(parse("?A"), ty);
    }

    #[test]
    fn test_array_shapes() {
        assert_eq!(parse("string[]"), TypeExpr::array_of(TypeExpr::single("string")));
        assert_eq!(parse("int[][]").to_string(), "int[][]");
        match parse("(int|string|null)[]") {
            TypeExpr::Array(array) => match array.element.as_ref() {
                TypeExpr::Union(union) => assert_eq!(union.types().len(), 3),
                other => panic!("expected union element, got {other:?}"),
            },
            other => panic!("expected array, got {other:?}"),
        }
    }

    #[test]
    fn test_generic_instantiation() {
        assert_eq!(parse("JsonResponse<UserOutput>").to_string(), "JsonResponse<UserOutput>");
        assert_eq!(
            parse("\\App\\JsonResponse<\\App\\UserOutput[]>"),
            TypeExpr::from(SingleType::generic(
                "JsonResponse",
                vec![TypeExpr::array_of(TypeExpr::single("UserOutput"))],
            ))
        );
    }

    #[test]
    fn test_array_generics_become_arrays() {
        assert_eq!(parse("array<User>"), TypeExpr::array_of(TypeExpr::single("User")));
        assert_eq!(parse("list<int>"), TypeExpr::array_of(TypeExpr::single("int")));
        assert_eq!(
            parse("array<string, int|null>"),
            TypeExpr::array_of(TypeExpr::nullable(TypeExpr::single("int")))
        );
        assert_eq!(parse("non-empty-string"), TypeExpr::single("string"));
    }

    #[test]
    fn test_malformed_hints() {
        for hint in ["", "int[", "Foo<Bar", "(A|B", "A|", "'literal'", "A B"] {
            let err = parse_type(hint).unwrap_err();
            assert_eq!(err.hint, hint);
        }
    }

    #[test]
    fn test_doc_block_tags() {
        let doc = "/**\n * @template T\n * @param T $data\n * @param array<string, int> $counts extra words\n * @return JsonResponse<User[]>\n */";
        let block = DocBlock::parse(doc);
        assert_eq!(block.template(), Some("T"));
        assert_eq!(block.param("data"), Some("T"));
        assert_eq!(block.param("counts"), Some("array<string, int>"));
        assert_eq!(block.param("missing"), None);
        assert_eq!(block.return_type(), Some("JsonResponse<User[]>"));
        assert_eq!(block.var(), None);
    }

    #[test]
    fn test_single_line_var() {
        let block = DocBlock::parse("/** @var string[] */");
        assert_eq!(block.var(), Some("string[]"));

        let spaced = DocBlock::parse("/** @var int | null $count */");
        assert_eq!(spaced.var(), Some("int | null"));
    }
}

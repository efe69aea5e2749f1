// ABOUTME: Lexer transforming Monk source text into a stream of tokens

use crate::token::{lookup_ident, Token, TokenKind};

/// A stateful cursor over the input bytes, producing one token per
/// `next_token` call. Once the input is exhausted it yields `Eof` forever.
pub struct Lexer {
    input: Vec<u8>,
    /// Index of the byte currently under the cursor.
    position: usize,
    /// Index of the next byte to read.
    read_position: usize,
    /// The byte under the cursor, or 0 past the end of input.
    ch: u8,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        let mut lexer = Lexer {
            input: input.as_bytes().to_vec(),
            position: 0,
            read_position: 0,
            ch: 0,
        };
        lexer.read_char();
        lexer
    }

    /// Returns the next token in the input, skipping any leading whitespace.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let token = match self.ch {
            b'=' => {
                if self.peek_char() == b'=' {
                    self.read_char();
                    Token::new(TokenKind::Eq, "==")
                } else {
                    Token::new(TokenKind::Assign, "=")
                }
            }
            b'!' => {
                if self.peek_char() == b'=' {
                    self.read_char();
                    Token::new(TokenKind::NotEq, "!=")
                } else {
                    Token::new(TokenKind::Bang, "!")
                }
            }
            b'+' => Token::new(TokenKind::Plus, "+"),
            b'-' => Token::new(TokenKind::Minus, "-"),
            b'*' => Token::new(TokenKind::Asterisk, "*"),
            b'/' => Token::new(TokenKind::Slash, "/"),
            b'<' => Token::new(TokenKind::Lt, "<"),
            b'>' => Token::new(TokenKind::Gt, ">"),
            b',' => Token::new(TokenKind::Comma, ","),
            b';' => Token::new(TokenKind::Semicolon, ";"),
            b'(' => Token::new(TokenKind::LParen, "("),
            b')' => Token::new(TokenKind::RParen, ")"),
            b'{' => Token::new(TokenKind::LBrace, "{"),
            b'}' => Token::new(TokenKind::RBrace, "}"),
            0 => Token::new(TokenKind::Eof, ""),
            ch if is_letter(ch) => {
                // read_identifier leaves the cursor on the terminator
                let literal = self.read_identifier();
                return Token::new(lookup_ident(&literal), literal);
            }
            ch if ch.is_ascii_digit() => {
                let literal = self.read_number();
                return Token::new(TokenKind::Int, literal);
            }
            ch => Token::new(TokenKind::Illegal, (ch as char).to_string()),
        };

        self.read_char();

        token
    }

    fn read_char(&mut self) {
        self.ch = if self.read_position >= self.input.len() {
            0
        } else {
            self.input[self.read_position]
        };
        self.position = self.read_position;
        self.read_position += 1;
    }

    fn peek_char(&self) -> u8 {
        if self.read_position >= self.input.len() {
            0
        } else {
            self.input[self.read_position]
        }
    }

    fn skip_whitespace(&mut self) {
        while is_whitespace(self.ch) {
            self.read_char();
        }
    }

    /// Reads the maximal run of letters, digits, and underscores.
    fn read_identifier(&mut self) -> String {
        let start = self.position;
        while is_letter(self.ch) || self.ch.is_ascii_digit() {
            self.read_char();
        }
        String::from_utf8_lossy(&self.input[start..self.position]).into_owned()
    }

    /// Reads the maximal run of ASCII digits.
    fn read_number(&mut self) -> String {
        let start = self.position;
        while self.ch.is_ascii_digit() {
            self.read_char();
        }
        String::from_utf8_lossy(&self.input[start..self.position]).into_owned()
    }
}

fn is_letter(ch: u8) -> bool {
    ch.is_ascii_alphabetic() || ch == b'_'
}

fn is_whitespace(ch: u8) -> bool {
    matches!(ch, b' ' | b'\t' | b'\n' | b'\r')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_tokens(input: &str, expected: &[(TokenKind, &str)]) {
        let mut lexer = Lexer::new(input);

        for (i, (kind, literal)) in expected.iter().enumerate() {
            let token = lexer.next_token();
            assert_eq!(token.kind, *kind, "tests[{}] - wrong token kind", i);
            assert_eq!(token.literal, *literal, "tests[{}] - wrong literal", i);
        }
    }

    #[test]
    fn test_punctuation() {
        assert_tokens(
            "=+(){},;",
            &[
                (TokenKind::Assign, "="),
                (TokenKind::Plus, "+"),
                (TokenKind::LParen, "("),
                (TokenKind::RParen, ")"),
                (TokenKind::LBrace, "{"),
                (TokenKind::RBrace, "}"),
                (TokenKind::Comma, ","),
                (TokenKind::Semicolon, ";"),
                (TokenKind::Eof, ""),
            ],
        );
    }

    #[test]
    fn test_full_program() {
        let input = "
            let five = 5;
            let ten = 10;

            let add = fn(x, y) {
              x + y;
            };

            let result = add(five, ten);
            !-/*5;
            5 < 10 > 5;

            if (5 < 10) {
              return true;
            } else {
              return false;
            }

            10 == 10;
            10 != 9;
        ";

        assert_tokens(
            input,
            &[
                (TokenKind::Let, "let"),
                (TokenKind::Ident, "five"),
                (TokenKind::Assign, "="),
                (TokenKind::Int, "5"),
                (TokenKind::Semicolon, ";"),
                (TokenKind::Let, "let"),
                (TokenKind::Ident, "ten"),
                (TokenKind::Assign, "="),
                (TokenKind::Int, "10"),
                (TokenKind::Semicolon, ";"),
                (TokenKind::Let, "let"),
                (TokenKind::Ident, "add"),
                (TokenKind::Assign, "="),
                (TokenKind::Function, "fn"),
                (TokenKind::LParen, "("),
                (TokenKind::Ident, "x"),
                (TokenKind::Comma, ","),
                (TokenKind::Ident, "y"),
                (TokenKind::RParen, ")"),
                (TokenKind::LBrace, "{"),
                (TokenKind::Ident, "x"),
                (TokenKind::Plus, "+"),
                (TokenKind::Ident, "y"),
                (TokenKind::Semicolon, ";"),
                (TokenKind::RBrace, "}"),
                (TokenKind::Semicolon, ";"),
                (TokenKind::Let, "let"),
                (TokenKind::Ident, "result"),
                (TokenKind::Assign, "="),
                (TokenKind::Ident, "add"),
                (TokenKind::LParen, "("),
                (TokenKind::Ident, "five"),
                (TokenKind::Comma, ","),
                (TokenKind::Ident, "ten"),
                (TokenKind::RParen, ")"),
                (TokenKind::Semicolon, ";"),
                (TokenKind::Bang, "!"),
                (TokenKind::Minus, "-"),
                (TokenKind::Slash, "/"),
                (TokenKind::Asterisk, "*"),
                (TokenKind::Int, "5"),
                (TokenKind::Semicolon, ";"),
                (TokenKind::Int, "5"),
                (TokenKind::Lt, "<"),
                (TokenKind::Int, "10"),
                (TokenKind::Gt, ">"),
                (TokenKind::Int, "5"),
                (TokenKind::Semicolon, ";"),
                (TokenKind::If, "if"),
                (TokenKind::LParen, "("),
                (TokenKind::Int, "5"),
                (TokenKind::Lt, "<"),
                (TokenKind::Int, "10"),
                (TokenKind::RParen, ")"),
                (TokenKind::LBrace, "{"),
                (TokenKind::Return, "return"),
                (TokenKind::True, "true"),
                (TokenKind::Semicolon, ";"),
                (TokenKind::RBrace, "}"),
                (TokenKind::Else, "else"),
                (TokenKind::LBrace, "{"),
                (TokenKind::Return, "return"),
                (TokenKind::False, "false"),
                (TokenKind::Semicolon, ";"),
                (TokenKind::RBrace, "}"),
                (TokenKind::Int, "10"),
                (TokenKind::Eq, "=="),
                (TokenKind::Int, "10"),
                (TokenKind::Semicolon, ";"),
                (TokenKind::Int, "10"),
                (TokenKind::NotEq, "!="),
                (TokenKind::Int, "9"),
                (TokenKind::Semicolon, ";"),
                (TokenKind::Eof, ""),
            ],
        );
    }

    #[test]
    fn test_identifiers_with_underscores_and_digits() {
        assert_tokens(
            "foo_bar _baz x1",
            &[
                (TokenKind::Ident, "foo_bar"),
                (TokenKind::Ident, "_baz"),
                (TokenKind::Ident, "x1"),
                (TokenKind::Eof, ""),
            ],
        );
    }

    #[test]
    fn test_illegal_bytes() {
        assert_tokens(
            "1 @ 2",
            &[
                (TokenKind::Int, "1"),
                (TokenKind::Illegal, "@"),
                (TokenKind::Int, "2"),
                (TokenKind::Eof, ""),
            ],
        );
    }

    #[test]
    fn test_eof_repeats() {
        let mut lexer = Lexer::new("5");
        assert_eq!(lexer.next_token().kind, TokenKind::Int);

        for _ in 0..3 {
            let token = lexer.next_token();
            assert_eq!(token.kind, TokenKind::Eof);
            assert_eq!(token.literal, "");
        }
    }

    #[test]
    fn test_empty_input() {
        assert_tokens("", &[(TokenKind::Eof, "")]);
        assert_tokens("   \t\r\n  ", &[(TokenKind::Eof, "")]);
    }
}

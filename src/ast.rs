use crate::token::Token;

/// Every node can report the literal of the token that introduced it.
pub trait Node {
    fn token_literal(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Node for Program {
    fn token_literal(&self) -> &str {
        self.statements
            .first()
            .map(|statement| statement.token_literal())
            .unwrap_or("")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Let {
        token: Token, // Kind::Let
        name: Identifier,
        value: Option<Expression>,
    },
    Return {
        token: Token, // Kind::Return
        value: Option<Expression>,
    },
    Expression {
        token: Token, // first token of the expression
        expression: Option<Expression>,
    },
}

impl Node for Statement {
    fn token_literal(&self) -> &str {
        match self {
            Statement::Let { token, .. }
            | Statement::Return { token, .. }
            | Statement::Expression { token, .. } => &token.literal,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Identifier(Identifier),
    IntegerLiteral { token: Token, value: i64 },
    StringLiteral { token: Token, value: String },
}

impl Node for Expression {
    fn token_literal(&self) -> &str {
        match self {
            Expression::Identifier(identifier) => identifier.token_literal(),
            Expression::IntegerLiteral { token, .. } | Expression::StringLiteral { token, .. } => {
                &token.literal
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    pub token: Token, // Kind::Ident
    pub value: String,
}

impl Node for Identifier {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Lexer;

    #[test]
    fn empty_program_has_empty_literal() {
        let program = Program { statements: Vec::new() };
        assert_eq!(program.token_literal(), "");
    }

    #[test]
    fn nodes_report_their_introducing_token() {
        let tokens = Lexer::new("let x = 5;").tokenize();
        let name = Identifier {
            token: tokens[1].clone(),
            value: tokens[1].literal.clone(),
        };
        let value = Expression::IntegerLiteral {
            token: tokens[3].clone(),
            value: 5,
        };
        assert_eq!(name.token_literal(), "x");
        assert_eq!(value.token_literal(), "5");

        let program = Program {
            statements: vec![
                Statement::Let {
                    token: tokens[0].clone(),
                    name,
                    value: Some(value),
                },
                Statement::Return {
                    token: Lexer::new("return").next_token(),
                    value: None,
                },
            ],
        };
        assert_eq!(program.token_literal(), "let");
        assert_eq!(program.statements[1].token_literal(), "return");
    }

    #[test]
    fn string_and_expression_statements() {
        let token = Lexer::new("\"hi\"").next_token();
        let expression = Expression::StringLiteral {
            token: token.clone(),
            value: token.literal.clone(),
        };
        let statement = Statement::Expression {
            token,
            expression: Some(expression),
        };
        assert_eq!(statement.token_literal(), "hi");
    }
}

use test_log::test;
use tinyc_ast::{Expr, Stmt, TreeDisplay};
use tinyc_parsing::lexer::{LexingError, Scanner};
use tinyc_parsing::parser::{ErrorKind, SyntacticParser};
use tinyc_parsing::{syntactic_parse, tokenize};
use tinyc_tokens::TokenKind;

const SAMPLE: &str = "int main() {\n  return 123;\n}\n";

#[test]
fn sample_program_renders() {
    let program = syntactic_parse(SAMPLE).expect("sample should parse");
    assert_eq!(
        program.to_string(),
        "ProgramNode\n  FunctionDefinitionNode: int main()\n  Body:\n    ReturnStatementNode (return)\n      IntegerLiteralNode: 123 (Value: 123)\n"
    );
}

#[test]
fn token_names() {
    let names = tokenize("int main(){return 123;}")
        .into_iter()
        .map(|token| token.kind().to_string())
        .collect::<Vec<_>>();
    assert_eq!(
        names,
        [
            "KEYWORD_INT",
            "IDENTIFIER",
            "LPAREN",
            "RPAREN",
            "LBRACE",
            "KEYWORD_RETURN",
            "INTEGER_LITERAL",
            "SEMICOLON",
            "RBRACE",
            "END_OF_FILE"
        ]
    );
}

#[test]
fn unreserved_c_words_are_names() {
    assert_eq!(tokenize("sizeof")[0].kind(), TokenKind::Identifier);
    assert_eq!(tokenize("long")[0].kind(), TokenKind::Identifier);
    let program = syntactic_parse("int sizeof() { return 1; }").expect("sizeof is an identifier");
    assert_eq!(program.functions[0].name(), "sizeof");
}

#[test]
fn unterminated_comment_error_is_one_line() {
    let error = syntactic_parse("int main() { /* never\nclosed").expect_err("comment is never closed");
    let message = error.to_string();
    assert!(!message.contains('\n'), "{message:?}");
    assert!(message.contains("'/* never...'"), "{message}");
}

#[test]
fn parsing_is_idempotent() {
    let first = syntactic_parse(SAMPLE).expect("should parse");
    let second = syntactic_parse(SAMPLE).expect("should parse");
    assert_eq!(first, second);
}

#[test]
fn comments_do_not_change_the_tree() {
    let commented = "// entry point\nint /* type */ main() {\n  return /* the answer */ 123; // done\n}\n";
    let commented = syntactic_parse(commented).expect("should parse");
    let plain = syntactic_parse(SAMPLE).expect("should parse");
    assert_eq!(commented.to_string(), plain.to_string());
}

#[test]
fn empty_body() {
    let program = syntactic_parse("int main(){}").expect("empty body is valid");
    assert_eq!(program.functions.len(), 1);
    assert!(program.functions[0].body.is_empty());
    assert!(program.to_string().contains("    <empty body>\n"));
}

#[test]
fn typo_in_keyword() {
    let error = syntactic_parse("int main() { retrun 1; }").expect_err("retrun is not a keyword");
    assert_eq!((error.line(), error.column()), (1, 14));
    assert!(error.message().starts_with("Expected a statement"));
    assert_eq!(
        error.non_terminals(),
        ["Program", "FunctionDefinition", "Stmt"]
    );
}

#[test]
fn unterminated_string() {
    let src = "int main(){return \"abc;}";
    let unknown = tokenize(src)
        .into_iter()
        .find(|token| token.is(TokenKind::Unknown))
        .expect("should have an unknown token");
    assert_eq!(unknown.column(), 19);

    let mut parser = SyntacticParser::new(Scanner::new(src));
    let error = parser.parse_program().expect_err("should fail");
    assert!(
        matches!(error.kind, ErrorKind::UnexpectedToken { found, .. } if found.is(TokenKind::Unknown)),
        "{error}"
    );
    assert_eq!(
        parser
            .scanner()
            .diagnostics()
            .iter()
            .map(|d| d.error.clone())
            .collect::<Vec<_>>(),
        [LexingError::UnterminatedString]
    );
}

#[test]
fn error_positions_on_later_lines() {
    let src = "int main() {\n  return 1\n}\n";
    let error = syntactic_parse(src).expect_err("missing semicolon");
    assert_eq!((error.line(), error.column()), (3, 1));
    let snippet = error.snippet(src).to_string();
    assert_eq!(
        snippet,
        "1 | int main() {\n2 |   return 1\n3 | }\n  | ^\n"
    );
}

#[test]
fn return_values_are_decoded() {
    let program = syntactic_parse("int f(){return 0;} int g(){return 9000000000;}").expect("should parse");
    let values = program
        .functions
        .iter()
        .flat_map(|function| &function.body)
        .map(|stmt| match stmt {
            Stmt::Return(ret) => match &ret.value {
                Some(Expr::IntegerLiteral(literal)) => literal.value(),
                None => panic!("every return has a value"),
            },
        })
        .collect::<Vec<_>>();
    assert_eq!(values, [0, 9_000_000_000]);
}

#[test]
fn nested_rendering() {
    let program = syntactic_parse(SAMPLE).expect("should parse");
    let function = &program.functions[0];
    assert!(function
        .tree(0)
        .to_string()
        .starts_with("FunctionDefinitionNode: int main()\nBody:\n"));
}

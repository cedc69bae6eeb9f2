#[macro_use]
extern crate bencher;

use bencher::Bencher;

fn graphql_ast_tokenize_gql_tree(bench: &mut Bencher) {
    use gql_tree::ast::tokenize;
    bench.iter(|| tokenize(QUERY).filter(Result::is_ok).count());
}

fn graphql_ast_parse_gql_tree(bench: &mut Bencher) {
    use gql_tree::ast::*;
    bench.iter(|| {
        let ctx = ASTContext::new();
        parse(&ctx, QUERY).ok();
    });
}

fn graphql_ast_parse_async_graphql_parser(bench: &mut Bencher) {
    use async_graphql_parser::parse_query;
    bench.iter(|| {
        parse_query::<&str>(QUERY).ok();
    });
}

fn graphql_ast_parse_graphql_parser(bench: &mut Bencher) {
    use graphql_parser::query::parse_query;
    bench.iter(|| {
        parse_query::<&str>(QUERY).ok();
    });
}

fn graphql_ast_parse_apollo_parser(bench: &mut Bencher) {
    use apollo_parser::Parser;
    bench.iter(|| {
        let parser = Parser::new(QUERY);
        let cst = parser.parse();
        cst.document();
    });
}

fn graphql_ast_render_gql_tree(bench: &mut Bencher) {
    use gql_tree::ast::*;
    let ctx = ASTContext::new();
    let ast = parse(&ctx, QUERY).unwrap();
    bench.iter(|| ast.render());
}

fn graphql_ast_print_gql_parser(bench: &mut Bencher) {
    use graphql_parser::query::parse_query;
    let ast = parse_query::<&str>(QUERY).ok().unwrap();
    bench.iter(|| ast.to_string());
}

fn graphql_ast_print_apollo_parser(bench: &mut Bencher) {
    use apollo_parser::cst::CstNode;
    use apollo_parser::Parser;
    let parser = Parser::new(QUERY);
    let cst = parser.parse();
    let doc = cst.document();
    bench.iter(|| doc.source_string());
}

fn graphql_ast_to_json_gql_tree(bench: &mut Bencher) {
    use gql_tree::ast::*;
    use gql_tree::json::ValueFromNode;
    let ctx = ASTContext::new();
    let ast = parse(&ctx, QUERY).unwrap();
    bench.iter(|| {
        ast.operations()
            .flat_map(|operation| operation.selection_set.fields())
            .filter_map(|field| field.arguments.as_ref())
            .map(ValueFromNode::to_json)
            .count()
    });
}

benchmark_group!(
    parse,
    graphql_ast_tokenize_gql_tree,
    graphql_ast_parse_gql_tree,
    graphql_ast_parse_async_graphql_parser,
    graphql_ast_parse_graphql_parser,
    graphql_ast_parse_apollo_parser,
    graphql_ast_render_gql_tree,
    graphql_ast_print_gql_parser,
    graphql_ast_print_apollo_parser,
    graphql_ast_to_json_gql_tree
);

benchmark_main!(parse);

static QUERY: &str = include_str!("../fixture/kitchen_sink.graphql");

//! End-to-end rendering behavior, including the layout-preservation cases
//! around list sections.

use serde_json::json;
use whisker::render;

#[test]
fn test_plain_text_passes_through() {
    let ret = render("no tags here", &json!({})).unwrap();
    assert_eq!(ret, "no tags here");
}

#[test]
fn test_basic() {
    let ret = render("Hi {{thing}}!", &json!({"thing": "world"})).unwrap();
    assert_eq!(ret, "Hi world!");
}

#[test]
fn test_less_basic() {
    let template = "It's a nice day for {{beverage}}, right {{person}}?";
    let ret = render(template, &json!({"beverage": "soda", "person": "Bob"})).unwrap();
    assert_eq!(ret, "It's a nice day for soda, right Bob?");
}

#[test]
fn test_even_less_basic() {
    let template = "I think {{name}} wants a {{thing}}, right {{name}}?";
    let ret = render(template, &json!({"name": "Jon", "thing": "racecar"})).unwrap();
    assert_eq!(ret, "I think Jon wants a racecar, right Jon?");
}

#[test]
fn test_ignores_misses() {
    let template = "I think {{name}} wants a {{thing}}, right {{name}}?";
    let ret = render(template, &json!({"name": "Jon"})).unwrap();
    assert_eq!(ret, "I think Jon wants a , right Jon?");
}

#[test]
fn test_render_zero() {
    let ret = render("My value is {{value}}.", &json!({"value": 0})).unwrap();
    assert_eq!(ret, "My value is 0.");
}

#[test]
fn test_comments() {
    let ret = render("What {{! the }} what?", &json!({})).unwrap();
    assert_eq!(ret, "What  what?");
}

#[test]
fn test_false_sections_are_hidden() {
    let ret = render("Ready {{#set}}set {{/set}}go!", &json!({"set": false})).unwrap();
    assert_eq!(ret, "Ready go!");
}

#[test]
fn test_true_sections_are_shown() {
    let ret = render("Ready {{#set}}set {{/set}}go!", &json!({"set": true})).unwrap();
    assert_eq!(ret, "Ready set go!");
}

#[test]
fn test_non_strings() {
    let template = "{{#stats}}({{key}} & {{value}}){{/stats}}";
    let stats = json!({"stats": [
        {"key": 123, "value": ["something"]},
        {"key": "chris", "value": 0.9},
    ]});
    let ret = render(template, &stats).unwrap();
    assert_eq!(ret, "(123 & [&quot;something&quot;])(chris & 0.9)");
}

#[test]
fn test_unicode() {
    let template = "Name: {{name}}; Age: {{age}}";
    let ret = render(template, &json!({"name": "Henri Poincaré", "age": 156})).unwrap();
    assert_eq!(ret, "Name: Henri Poincaré; Age: 156");
}

#[test]
fn test_sections() {
    let template = "\n<ul>\n  {{#users}}\n    <li>{{name}}</li>\n  {{/users}}\n</ul>\n";
    let context = json!({"users": [{"name": "Chris"}, {"name": "Tom"}, {"name": "PJ"}]});
    let ret = render(template, &context).unwrap();
    assert_eq!(
        ret,
        "\n<ul>\n  <li>Chris</li>\n  <li>Tom</li>\n  <li>PJ</li>\n</ul>\n"
    );
}

#[test]
fn test_inner_context_does_not_propagate_variables() {
    let template = "{{#foo}}{{thing1}} and {{thing2}} and {{outer_thing}}{{/foo}}{{^foo}}Not foo!{{/foo}} {{thing2}}";
    let context = json!({
        "outer_thing": "two",
        "foo": {"thing1": "one", "thing2": "foo"},
    });
    let ret = render(template, &context).unwrap();
    assert_eq!(ret, "one and foo and two ");
}

#[test]
fn test_inner_context_looping() {
    let template = "Say '{{greeting}}', everyone:\n\n        {{#list}}\n          {{name}} says: {{greeting}}\n        {{/list}}\n        ";
    let context = json!({
        "greeting": "hello",
        "list": [
            {"name": "eeny"},
            {"name": "meeny"},
            {"name": "miney"},
            {"name": "mo"},
        ],
    });
    let ret = render(template, &context).unwrap();
    let expected = "Say 'hello', everyone:\n\n        eeny says: hello\n        meeny says: hello\n        miney says: hello\n        mo says: hello\n        ";
    assert_eq!(ret, expected);
}

#[test]
fn test_preserve_whitespace() {
    let template = "<ul>\n    {{#link}}\n        <li><a href=\"{{url}}\">{{text}}</a></li>\n    {{/link}}\n</ul>";
    let context = json!({
        "link": [
            {"text": "github", "url": "http://github.com"},
            {"text": "mustache", "url": "http://mustache.github.com"},
            {"text": "cheat sheets", "url": "http://cheat.errtheblog.com"},
        ],
    });
    let expected = "<ul>\n    <li><a href=\"http://github.com\">github</a></li>\n    <li><a href=\"http://mustache.github.com\">mustache</a></li>\n    <li><a href=\"http://cheat.errtheblog.com\">cheat sheets</a></li>\n</ul>";
    let ret = render(template, &context).unwrap();
    assert_eq!(ret, expected);
}

#[test]
fn test_preserve_whitespace_nested_contexts() {
    let template = "{{#blogroll}}\n    {{#list}}\n        <ul>\n            {{#link}}\n                    <li><a href=\"{{url}}\">{{text}}</a></li>\n            {{/link}}\n        </ul>\n    {{/list}}\n{{/blogroll}}";
    let context = json!({
        "blogroll": {
            "list": {
                "link": [
                    {"text": "github", "url": "http://github.com"},
                    {"text": "mustache", "url": "http://mustache.github.com"},
                    {"text": "cheat sheets", "url": "http://cheat.errtheblog.com"},
                ],
            },
        },
    });
    let expected = "<ul>\n            <li><a href=\"http://github.com\">github</a></li>\n            <li><a href=\"http://mustache.github.com\">mustache</a></li>\n            <li><a href=\"http://cheat.errtheblog.com\">cheat sheets</a></li>\n        </ul>\n";
    let ret = render(template, &context).unwrap();
    assert_eq!(ret, expected);
}

#[test]
fn test_rendered_output_is_a_fixed_point() {
    let template = "I think {{name}} wants a {{thing}}.";
    let once = render(template, &json!({"name": "Jon", "thing": "racecar"})).unwrap();
    let twice = render(&once, &json!({})).unwrap();
    assert_eq!(once, twice);
}

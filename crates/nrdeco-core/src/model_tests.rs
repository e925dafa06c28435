use super::*;

fn user() -> Value {
    Value::named("User")
}

#[test]
fn render_named() {
    assert_eq!(user().to_string(), "User");
    assert_eq!(Value::named("error").to_string(), "error");
}

#[test]
fn render_qualified_uses_last_path_segment() {
    let model = Package::new("github.com/acme/shop/domain/model");
    assert_eq!(Value::qualified("User", model).to_string(), "model.User");

    let context = Package::new("context");
    assert_eq!(Value::qualified("Context", context).to_string(), "context.Context");
}

#[test]
fn render_pointer_to_slice() {
    let value = Value::pointer(Value::slice(user()));
    assert_eq!(value.to_string(), "*[]User");
}

#[test]
fn render_map_of_slice() {
    let value = Value::Map {
        key: "string".into(),
        element: Box::new(Value::slice(user())),
    };
    assert_eq!(value.to_string(), "map[string][]User");
}

#[test]
fn render_channels() {
    let chan = |dir| Value::Chan {
        dir,
        element: Box::new(Value::named("int")),
    };
    assert_eq!(chan(ChanDir::Both).to_string(), "chan int");
    assert_eq!(chan(ChanDir::Send).to_string(), "chan<- int");
    assert_eq!(chan(ChanDir::Recv).to_string(), "<-chan int");
}

#[test]
fn render_variadic() {
    assert_eq!(Value::variadic(Value::named("string")).to_string(), "...string");
}

#[test]
fn render_func_results() {
    let no_results = Value::Func {
        params: Params(vec![]),
        returns: Returns(vec![]),
    };
    assert_eq!(no_results.to_string(), "func()");

    let single = Value::Func {
        params: Params(vec![Value::named("string"), Value::variadic(Value::named("int"))]),
        returns: Returns(vec![Value::named("error")]),
    };
    assert_eq!(single.to_string(), "func(string, ...int) error");

    let many = Value::Func {
        params: Params(vec![user()]),
        returns: Returns(vec![Value::pointer(user()), Value::named("error")]),
    };
    assert_eq!(many.to_string(), "func(User) (*User, error)");
}

#[test]
fn context_detection_requires_package() {
    assert!(Value::qualified("Context", Package::new("context")).is_context());
    assert!(!Value::named("Context").is_context());
    assert!(!Value::qualified("Context", Package::new("golang.org/x/net/context")).is_context());
    assert!(!Value::pointer(Value::qualified("Context", Package::new("context"))).is_context());
}

#[test]
fn params_has_context() {
    let ctx = Value::qualified("Context", Package::new("context"));
    assert!(Params(vec![Value::named("string"), ctx]).has_context());
    assert!(!Params(vec![Value::named("string")]).has_context());
    assert!(!Params(vec![]).has_context());
}

#[test]
fn import_paths_sorted_and_deduplicated() {
    let mut file = File::new("v1.0.0", "repository");
    file.imports.insert("newrelic".into(), Package::new("github.com/newrelic/go-agent/v3/newrelic"));
    file.imports.insert("context".into(), Package::new("context"));
    file.imports.insert("m".into(), Package::new("github.com/acme/model"));
    file.imports.insert("model".into(), Package::new("github.com/acme/model"));

    assert_eq!(
        file.import_paths(),
        vec![
            "context",
            "github.com/acme/model",
            "github.com/newrelic/go-agent/v3/newrelic",
        ]
    );
}

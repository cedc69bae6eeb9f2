use bumpalo::collections::Vec;
use serde_json::Value as JSValue;

use crate::ast::*;

/// Convert a [serde_json::Value] to an AST Value Node allocated in the given AST Context.
///
/// Numbers that fit into an `i64` become [`Value::Int`], all other numbers become
/// [`Value::Float`]. Strings and object keys are copied into the context's arena.
pub fn value_from_json<'a>(ctx: &'a ASTContext, value: &JSValue) -> Value<'a> {
    match value {
        JSValue::Array(list) => {
            let mut children = Vec::with_capacity_in(list.len(), &ctx.arena);
            for item in list {
                children.push(value_from_json(ctx, item));
            }
            Value::List(ListValue { children })
        }
        JSValue::Object(map) => {
            let mut object = ObjectValue::new_in(&ctx.arena);
            for (key, value) in map {
                object.insert(ObjectField {
                    name: ctx.alloc_str(key),
                    value: value_from_json(ctx, value),
                });
            }
            Value::Object(object)
        }
        JSValue::Number(num) => match num.as_i64() {
            Some(int) => Value::Int(int),
            None => Value::Float(num.as_f64().unwrap_or(f64::NAN)),
        },
        JSValue::Bool(value) => Value::Boolean(*value),
        JSValue::String(str) => Value::String(ctx.alloc_str(str)),
        JSValue::Null => Value::Null,
    }
}

#[cfg(test)]
mod tests {
    use super::value_from_json;
    use crate::ast::*;
    use crate::json::ValueFromNode;
    use serde_json::json;

    #[test]
    fn scalars() {
        let ctx = ASTContext::new();
        assert_eq!(value_from_json(&ctx, &json!(1)), Value::Int(1));
        assert_eq!(value_from_json(&ctx, &json!(-1.5)), Value::Float(-1.5));
        assert_eq!(value_from_json(&ctx, &json!(u64::MAX)), Value::Float(u64::MAX as f64));
        assert_eq!(value_from_json(&ctx, &json!("s")), Value::String("s"));
        assert_eq!(value_from_json(&ctx, &json!(false)), Value::Boolean(false));
        assert_eq!(value_from_json(&ctx, &json!(null)), Value::Null);
    }

    #[test]
    fn nested() {
        let ctx = ASTContext::new();
        let input = json!({ "list": [1, { "key": "value" }], "empty": {} });
        let value = value_from_json(&ctx, &input);
        assert_eq!(value.render(), r#"{empty: {}, list: [1, {key: "value"}]}"#);
        assert_eq!(value.to_json(), input);
    }
}

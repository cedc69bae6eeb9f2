use crate::ast::*;
use serde::ser::{Serialize, Serializer};
use serde_json::{Map as JSMap, Value as JSValue};

/// Trait for converting AST Value Nodes of a GraphQL language document to [serde_json::Value]s.
pub trait ValueFromNode {
    /// Convert current AST Value Node to a [serde_json::Value].
    fn to_json(&self) -> JSValue;
}

/// Floats that JSON can't represent, i.e. infinities and NaN, become `null`.
#[inline]
fn float_to_json(value: f64) -> JSValue {
    serde_json::Number::from_f64(value).map_or(JSValue::Null, JSValue::Number)
}

impl<'a> ValueFromNode for Value<'a> {
    #[inline]
    fn to_json(&self) -> JSValue {
        match self {
            Value::Int(value) => (*value).into(),
            Value::Float(value) => float_to_json(*value),
            Value::String(value) => (*value).into(),
            Value::Boolean(value) => (*value).into(),
            Value::List(list) => list.to_json(),
            Value::Object(object) => object.to_json(),
            Value::Null => JSValue::Null,
        }
    }
}

impl ValueFromNode for IntValue {
    #[inline]
    fn to_json(&self) -> JSValue {
        self.value.into()
    }
}

impl ValueFromNode for FloatValue {
    #[inline]
    fn to_json(&self) -> JSValue {
        float_to_json(self.value)
    }
}

impl ValueFromNode for BooleanValue {
    #[inline]
    fn to_json(&self) -> JSValue {
        self.value.into()
    }
}

impl<'a> ValueFromNode for StringValue<'a> {
    #[inline]
    fn to_json(&self) -> JSValue {
        self.value.into()
    }
}

impl ValueFromNode for NullValue {
    #[inline]
    fn to_json(&self) -> JSValue {
        JSValue::Null
    }
}

impl<'a> ValueFromNode for ListValue<'a> {
    /// Convert current ListValue Node to a JSON array, keeping the order of its values.
    #[inline]
    fn to_json(&self) -> JSValue {
        self.children
            .iter()
            .map(ValueFromNode::to_json)
            .collect::<Vec<JSValue>>()
            .into()
    }
}

impl<'a> ValueFromNode for ObjectValue<'a> {
    /// Convert current ObjectValue Node to a JSON object.
    #[inline]
    fn to_json(&self) -> JSValue {
        self.fields
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_json()))
            .collect::<JSMap<String, JSValue>>()
            .into()
    }
}

impl<'a> ValueFromNode for Arguments<'a> {
    /// Convert a Field's Arguments to a JSON object keyed by argument name. A repeated argument
    /// keeps its last value.
    #[inline]
    fn to_json(&self) -> JSValue {
        self.children
            .iter()
            .map(|argument| (argument.name.to_string(), argument.value.to_json()))
            .collect::<JSMap<String, JSValue>>()
            .into()
    }
}

impl<'a> Serialize for Value<'a> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Int(value) => serializer.serialize_i64(*value),
            Value::Float(value) if value.is_finite() => serializer.serialize_f64(*value),
            Value::Float(_) | Value::Null => serializer.serialize_unit(),
            Value::String(value) => serializer.serialize_str(value),
            Value::Boolean(value) => serializer.serialize_bool(*value),
            Value::List(list) => serializer.collect_seq(list.children.iter()),
            Value::Object(object) => serializer.collect_map(object.sorted_fields()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ValueFromNode;
    use crate::ast::*;
    use serde_json::json;

    #[test]
    fn values() {
        let ctx = ASTContext::new();
        let value = Value::parse(&ctx, r#"{ a: [1, 2.5, "s"], b: { c: null, d: true } }"#).unwrap();
        assert_eq!(
            value.to_json(),
            json!({ "a": [1, 2.5, "s"], "b": { "c": null, "d": true } })
        );
        assert_eq!(IntValue { value: -3 }.to_json(), json!(-3));
        assert_eq!(NullValue.to_json(), json!(null));
    }

    #[test]
    fn non_finite_floats() {
        assert_eq!(FloatValue { value: f64::NAN }.to_json(), json!(null));
        assert_eq!(Value::Float(f64::INFINITY).to_json(), json!(null));
        assert_eq!(serde_json::to_value(Value::Float(f64::NAN)).unwrap(), json!(null));
    }

    #[test]
    fn arguments() {
        let ctx = ASTContext::new();
        let arguments = Arguments::parse(&ctx, r#"(id: 1, names: ["a", "b"], id: 2)"#).unwrap();
        assert_eq!(arguments.to_json(), json!({ "id": 2, "names": ["a", "b"] }));
    }

    #[test]
    fn serialize() {
        let ctx = ASTContext::new();
        let value = Value::parse(&ctx, r#"{ z: 1, a: [true, null], m: "x" }"#).unwrap();
        assert_eq!(
            serde_json::to_string(value).unwrap(),
            r#"{"a":[true,null],"m":"x","z":1}"#
        );
        assert_eq!(serde_json::to_value(value).unwrap(), value.to_json());
    }
}

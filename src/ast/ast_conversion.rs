use super::ast::*;
use bumpalo::collections::vec::IntoIter;

impl<'a> From<IntValue> for Value<'a> {
    #[inline]
    fn from(node: IntValue) -> Self {
        Value::Int(node.value)
    }
}

impl<'a> From<FloatValue> for Value<'a> {
    #[inline]
    fn from(node: FloatValue) -> Self {
        Value::Float(node.value)
    }
}

impl<'a> From<StringValue<'a>> for Value<'a> {
    #[inline]
    fn from(node: StringValue<'a>) -> Self {
        Value::String(node.value)
    }
}

impl<'a> From<BooleanValue> for Value<'a> {
    #[inline]
    fn from(node: BooleanValue) -> Self {
        Value::Boolean(node.value)
    }
}

impl<'a> From<NullValue> for Value<'a> {
    #[inline]
    fn from(_: NullValue) -> Self {
        Value::Null
    }
}

impl<'a> From<ListValue<'a>> for Value<'a> {
    #[inline]
    fn from(node: ListValue<'a>) -> Self {
        Value::List(node)
    }
}

impl<'a> From<ObjectValue<'a>> for Value<'a> {
    #[inline]
    fn from(node: ObjectValue<'a>) -> Self {
        Value::Object(node)
    }
}

impl<'a> From<Field<'a>> for Selection<'a> {
    #[inline]
    fn from(field: Field<'a>) -> Self {
        Selection::Field(field)
    }
}

impl<'a> From<OperationDefinition<'a>> for Definition<'a> {
    #[inline]
    fn from(operation: OperationDefinition<'a>) -> Self {
        Definition::Executable(ExecutableDefinition::Operation(operation))
    }
}

impl<'a> IntoIterator for ListValue<'a> {
    type Item = Value<'a>;
    type IntoIter = IntoIter<'a, Value<'a>>;
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.children.into_iter()
    }
}

impl<'a> IntoIterator for Arguments<'a> {
    type Item = Argument<'a>;
    type IntoIter = IntoIter<'a, Argument<'a>>;
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.children.into_iter()
    }
}

impl<'a> IntoIterator for SelectionSet<'a> {
    type Item = Selection<'a>;
    type IntoIter = IntoIter<'a, Selection<'a>>;
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.selections.into_iter()
    }
}

impl<'a> IntoIterator for Document<'a> {
    type Item = Definition<'a>;
    type IntoIter = IntoIter<'a, Definition<'a>>;
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.definitions.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::super::*;
    use bumpalo::collections::Vec;

    #[test]
    fn literals_into_values() {
        let ctx = ASTContext::new();
        assert_eq!(Value::from(IntValue { value: 7 }), Value::Int(7));
        assert_eq!(Value::from(FloatValue { value: 0.5 }), Value::Float(0.5));
        assert_eq!(Value::from(StringValue::new(&ctx, "s")), Value::String("s"));
        assert_eq!(Value::from(BooleanValue { value: true }), Value::Boolean(true));
        assert_eq!(Value::from(NullValue), Value::Null);
    }

    #[test]
    fn definitions() {
        let ctx = ASTContext::new();
        let operation = OperationDefinition {
            operation: OperationKind::Query,
            name: None,
            variable_definitions: None,
            directives: None,
            selection_set: SelectionSet {
                selections: Vec::from_iter_in([Field::new_leaf("a").into()], &ctx.arena),
            },
        };
        let definition = Definition::from(operation.clone());
        assert_eq!(definition.operation(), Some(&operation));
        assert_eq!(definition.render(), "{\n  a\n}");
    }

    #[test]
    fn into_iter() {
        let ctx = ASTContext::new();
        let list = ListValue::parse(&ctx, "[1, 2, 3]").unwrap().clone();
        let sum: i64 = list.into_iter().filter_map(|value| value.as_int()).sum();
        assert_eq!(sum, 6);

        let document = Document::parse(&ctx, "{ a } { b }").unwrap().clone();
        assert_eq!(document.into_iter().count(), 2);
    }
}

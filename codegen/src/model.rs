/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Smithy JSON AST model types.
//!
//! Only the parts of the AST that affect generated code are modeled. Unknown keys are ignored.

use crate::error::CodegenError;
use crate::shape_id::ShapeId;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

pub const DOCUMENTATION: &str = "smithy.api#documentation";
pub const REQUIRED: &str = "smithy.api#required";
pub const ERROR: &str = "smithy.api#error";
pub const ENUM: &str = "smithy.api#enum";
pub const ENUM_VALUE: &str = "smithy.api#enumValue";
pub const TIMESTAMP_FORMAT: &str = "smithy.api#timestampFormat";
pub const AWS_JSON_1_1: &str = "aws.protocols#awsJson1_1";

const PRELUDE_NAMESPACE: &str = "smithy.api";

/// A parsed Smithy model.
#[derive(Debug, Clone, Deserialize)]
pub struct Model {
    pub smithy: String,
    #[serde(default)]
    pub metadata: BTreeMap<String, Value>,
    #[serde(default)]
    pub shapes: BTreeMap<ShapeId, Shape>,
}

impl Model {
    pub fn from_slice(bytes: &[u8]) -> Result<Model, CodegenError> {
        let mut model: Model =
            serde_json::from_slice(bytes).map_err(|err| CodegenError::json("model", err))?;
        if !(model.smithy.starts_with("1.") || model.smithy.starts_with("2.")) {
            return Err(CodegenError::Version(model.smithy));
        }
        model.add_prelude();
        Ok(model)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Model, CodegenError> {
        let path = path.as_ref();
        let contents = std::fs::read(path).map_err(|err| CodegenError::io(path, err))?;
        Self::from_slice(&contents)
    }

    pub fn shape(&self, id: &ShapeId) -> Option<&Shape> {
        self.shapes.get(id)
    }

    pub fn expect_shape(&self, id: &ShapeId) -> Result<&Shape, CodegenError> {
        self.shape(id)
            .ok_or_else(|| CodegenError::MissingShape(id.clone()))
    }

    fn add_prelude(&mut self) {
        let simple = |shape: fn(SimpleShape) -> Shape| shape(SimpleShape::default());
        let prelude = [
            ("String", simple(Shape::String)),
            ("Blob", simple(Shape::Blob)),
            ("Boolean", simple(Shape::Boolean)),
            ("PrimitiveBoolean", simple(Shape::Boolean)),
            ("Byte", simple(Shape::Byte)),
            ("PrimitiveByte", simple(Shape::Byte)),
            ("Short", simple(Shape::Short)),
            ("PrimitiveShort", simple(Shape::Short)),
            ("Integer", simple(Shape::Integer)),
            ("PrimitiveInteger", simple(Shape::Integer)),
            ("Long", simple(Shape::Long)),
            ("PrimitiveLong", simple(Shape::Long)),
            ("Float", simple(Shape::Float)),
            ("PrimitiveFloat", simple(Shape::Float)),
            ("Double", simple(Shape::Double)),
            ("PrimitiveDouble", simple(Shape::Double)),
            ("BigInteger", simple(Shape::BigInteger)),
            ("BigDecimal", simple(Shape::BigDecimal)),
            ("Timestamp", simple(Shape::Timestamp)),
            ("Document", simple(Shape::Document)),
            ("Unit", Shape::Structure(StructureShape::default())),
        ];
        for (name, shape) in prelude {
            self.shapes
                .entry(ShapeId::from_parts(PRELUDE_NAMESPACE, name))
                .or_insert(shape);
        }
    }
}

/// A shape in the model, tagged by its `type`.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Shape {
    Service(ServiceShape),
    Operation(OperationShape),
    Resource(SimpleShape),
    Structure(StructureShape),
    Union(StructureShape),
    #[serde(alias = "set")]
    List(ListShape),
    Map(MapShape),
    Enum(StructureShape),
    IntEnum(StructureShape),
    String(SimpleShape),
    Blob(SimpleShape),
    Boolean(SimpleShape),
    Byte(SimpleShape),
    Short(SimpleShape),
    Integer(SimpleShape),
    Long(SimpleShape),
    Float(SimpleShape),
    Double(SimpleShape),
    BigInteger(SimpleShape),
    BigDecimal(SimpleShape),
    Timestamp(SimpleShape),
    Document(SimpleShape),
}

impl Shape {
    pub fn traits(&self) -> &Traits {
        match self {
            Shape::Service(shape) => &shape.traits,
            Shape::Operation(shape) => &shape.traits,
            Shape::Structure(shape)
            | Shape::Union(shape)
            | Shape::Enum(shape)
            | Shape::IntEnum(shape) => &shape.traits,
            Shape::List(shape) => &shape.traits,
            Shape::Map(shape) => &shape.traits,
            Shape::Resource(shape)
            | Shape::String(shape)
            | Shape::Blob(shape)
            | Shape::Boolean(shape)
            | Shape::Byte(shape)
            | Shape::Short(shape)
            | Shape::Integer(shape)
            | Shape::Long(shape)
            | Shape::Float(shape)
            | Shape::Double(shape)
            | Shape::BigInteger(shape)
            | Shape::BigDecimal(shape)
            | Shape::Timestamp(shape)
            | Shape::Document(shape) => &shape.traits,
        }
    }

    /// The AST `type` name of this shape.
    pub fn type_name(&self) -> &'static str {
        match self {
            Shape::Service(_) => "service",
            Shape::Operation(_) => "operation",
            Shape::Resource(_) => "resource",
            Shape::Structure(_) => "structure",
            Shape::Union(_) => "union",
            Shape::List(_) => "list",
            Shape::Map(_) => "map",
            Shape::Enum(_) => "enum",
            Shape::IntEnum(_) => "intEnum",
            Shape::String(_) => "string",
            Shape::Blob(_) => "blob",
            Shape::Boolean(_) => "boolean",
            Shape::Byte(_) => "byte",
            Shape::Short(_) => "short",
            Shape::Integer(_) => "integer",
            Shape::Long(_) => "long",
            Shape::Float(_) => "float",
            Shape::Double(_) => "double",
            Shape::BigInteger(_) => "bigInteger",
            Shape::BigDecimal(_) => "bigDecimal",
            Shape::Timestamp(_) => "timestamp",
            Shape::Document(_) => "document",
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SimpleShape {
    #[serde(default)]
    pub traits: Traits,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ShapeRef {
    pub target: ShapeId,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceShape {
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub operations: Vec<ShapeRef>,
    #[serde(default)]
    pub resources: Vec<ShapeRef>,
    #[serde(default)]
    pub errors: Vec<ShapeRef>,
    #[serde(default)]
    pub traits: Traits,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OperationShape {
    pub input: Option<ShapeRef>,
    pub output: Option<ShapeRef>,
    #[serde(default)]
    pub errors: Vec<ShapeRef>,
    #[serde(default)]
    pub traits: Traits,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StructureShape {
    #[serde(default)]
    pub members: Members,
    #[serde(default)]
    pub traits: Traits,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListShape {
    pub member: MemberShape,
    #[serde(default)]
    pub traits: Traits,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MapShape {
    pub key: MemberShape,
    pub value: MemberShape,
    #[serde(default)]
    pub traits: Traits,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MemberShape {
    pub target: ShapeId,
    #[serde(default)]
    pub traits: Traits,
}

/// Structure members in the order the model declares them.
#[derive(Debug, Clone, Default)]
pub struct Members(Vec<(String, MemberShape)>);

impl Members {
    pub fn iter(&self) -> impl Iterator<Item = (&str, &MemberShape)> {
        self.0.iter().map(|(name, member)| (name.as_str(), member))
    }

    pub fn get(&self, name: &str) -> Option<&MemberShape> {
        self.iter()
            .find(|(member_name, _)| *member_name == name)
            .map(|(_, member)| member)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'de> Deserialize<'de> for Members {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct MembersVisitor;

        impl<'de> Visitor<'de> for MembersVisitor {
            type Value = Members;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a map of member names to member shapes")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut members = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((name, member)) = map.next_entry::<String, MemberShape>()? {
                    members.push((name, member));
                }
                Ok(Members(members))
            }
        }

        deserializer.deserialize_map(MembersVisitor)
    }
}

/// One entry of the `smithy.api#enum` trait.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EnumDefinition {
    pub value: String,
    pub name: Option<String>,
    pub documentation: Option<String>,
}

/// Traits applied to a shape, keyed by absolute trait shape ID.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct Traits(BTreeMap<String, Value>);

impl Traits {
    pub fn has(&self, id: &str) -> bool {
        self.0.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<&Value> {
        self.0.get(id)
    }

    pub fn documentation(&self) -> Option<&str> {
        self.get(DOCUMENTATION).and_then(Value::as_str)
    }

    pub fn is_required(&self) -> bool {
        self.has(REQUIRED)
    }

    /// `client` or `server` for error shapes.
    pub fn error(&self) -> Option<&str> {
        self.get(ERROR).and_then(Value::as_str)
    }

    pub fn enum_definitions(&self) -> Option<Result<Vec<EnumDefinition>, serde_json::Error>> {
        self.get(ENUM)
            .map(|value| serde_json::from_value(value.clone()))
    }

    pub fn enum_value(&self) -> Option<&Value> {
        self.get(ENUM_VALUE)
    }

    pub fn timestamp_format(&self) -> Option<&str> {
        self.get(TIMESTAMP_FORMAT).and_then(Value::as_str)
    }
}

#[cfg(test)]
mod test {
    use super::{Model, Shape};
    use crate::shape_id::ShapeId;
    use serde_json::json;

    fn model(shapes: serde_json::Value) -> Model {
        let ast = json!({ "smithy": "1.0", "shapes": shapes });
        Model::from_slice(ast.to_string().as_bytes()).unwrap()
    }

    #[test]
    fn members_keep_declaration_order() {
        // `json!` sorts object keys, so the fixture has to stay raw text
        let model = Model::from_slice(
            br#"{
                "smithy": "1.0",
                "shapes": {
                    "example#Job": {
                        "type": "structure",
                        "members": {
                            "Zeta": { "target": "smithy.api#String" },
                            "Alpha": { "target": "smithy.api#Integer", "traits": { "smithy.api#required": {} } },
                            "Mid": { "target": "smithy.api#Timestamp" }
                        }
                    }
                }
            }"#,
        )
        .unwrap();
        let shape = model.expect_shape(&ShapeId::new("example#Job")).unwrap();
        let members = match shape {
            Shape::Structure(structure) => &structure.members,
            other => panic!("unexpected shape {:?}", other),
        };
        let names: Vec<_> = members.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["Zeta", "Alpha", "Mid"]);
        assert!(members.get("Alpha").unwrap().traits.is_required());
    }

    #[test]
    fn prelude_shapes_are_available() {
        let model = model(json!({}));
        assert!(matches!(
            model.expect_shape(&ShapeId::new("smithy.api#String")),
            Ok(Shape::String(_))
        ));
        assert!(matches!(
            model.expect_shape(&ShapeId::new("smithy.api#PrimitiveLong")),
            Ok(Shape::Long(_))
        ));
        assert!(model.expect_shape(&ShapeId::new("example#Missing")).is_err());
    }

    #[test]
    fn sets_load_as_lists() {
        let model = model(json!({
            "example#Tags": { "type": "set", "member": { "target": "smithy.api#String" } }
        }));
        assert!(matches!(
            model.expect_shape(&ShapeId::new("example#Tags")),
            Ok(Shape::List(_))
        ));
    }

    #[test]
    fn enum_trait_definitions() {
        let model = model(json!({
            "example#WorkerType": {
                "type": "string",
                "traits": {
                    "smithy.api#enum": [
                        { "value": "Standard", "name": "Standard" },
                        { "value": "G.1X", "name": "G_1X", "documentation": "One DPU" }
                    ]
                }
            }
        }));
        let shape = model.expect_shape(&ShapeId::new("example#WorkerType")).unwrap();
        let definitions = shape.traits().enum_definitions().unwrap().unwrap();
        assert_eq!(definitions.len(), 2);
        assert_eq!(definitions[1].value, "G.1X");
        assert_eq!(definitions[1].name.as_deref(), Some("G_1X"));
        assert_eq!(definitions[1].documentation.as_deref(), Some("One DPU"));
    }

    #[test]
    fn rejects_unknown_idl_versions() {
        let err = Model::from_slice(br#"{"smithy": "3.0", "shapes": {}}"#).unwrap_err();
        assert_eq!(err.to_string(), "unsupported Smithy IDL version `3.0`");
    }

    #[test]
    fn loads_the_glue_model_shape_count() {
        let model = Model::from_file(concat!(env!("CARGO_MANIFEST_DIR"), "/../glue/model/glue.json"))
            .unwrap();
        let service = model
            .expect_shape(&ShapeId::new("com.amazonaws.glue#AWSGlue"))
            .unwrap();
        match service {
            Shape::Service(service) => {
                assert_eq!(service.version, "2017-03-31");
                assert_eq!(service.operations.len(), 125);
            }
            other => panic!("unexpected shape {:?}", other),
        }
    }
}

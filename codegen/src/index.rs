/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Resolves the shapes reachable from a service into the intermediate representation the
//! renderers work from.

use crate::error::CodegenError;
use crate::model::{self, EnumDefinition, MemberShape, Members, Model, Shape, Traits};
use crate::naming;
use crate::settings::CodegenSettings;
use crate::shape_id::ShapeId;
use crate::symbol::{Module, NamedKind, RustType};
use std::collections::{BTreeMap, BTreeSet, HashMap, VecDeque};
use tracing::debug;

const UNIT: &str = "smithy.api#Unit";
const EPOCH_SECONDS: &str = "epoch-seconds";

/// Generated structure, for operation inputs and outputs as well as model and error shapes.
#[derive(Debug, Clone)]
pub struct StructureIr {
    pub shape_id: ShapeId,
    pub name: String,
    pub module: Module,
    pub docs: Option<String>,
    pub members: Vec<MemberIr>,
    /// `client` or `server` for error shapes.
    pub error: Option<String>,
    /// Whether `Eq` and `Hash` can be derived.
    pub derive_eq: bool,
}

impl StructureIr {
    /// Name of the module holding the structure's builder.
    pub fn builder_module(&self) -> String {
        naming::escape_keyword(naming::to_snake_case(&self.name))
    }

    /// Structures with map members track duplicate keys, making `build()` fallible.
    pub fn has_maps(&self) -> bool {
        self.members.iter().any(|member| member.ty.is_map())
    }

    pub fn message_member(&self) -> Option<&MemberIr> {
        self.members
            .iter()
            .find(|member| member.ty == RustType::String && member.stem == "message")
    }
}

#[derive(Debug, Clone)]
pub struct MemberIr {
    /// Member name as it appears on the wire.
    pub wire_name: String,
    /// Field and method name, escaped when it collides with a keyword.
    pub field_name: String,
    /// Unescaped snake case name, used to derive `set_` and `get_` method names.
    pub stem: String,
    pub ty: RustType,
    pub docs: Option<String>,
    /// Carries `smithy.api#required`. Builders still accept the member being unset.
    pub required: bool,
}

#[derive(Debug, Clone)]
pub struct EnumIr {
    pub shape_id: ShapeId,
    pub name: String,
    pub docs: Option<String>,
    pub variants: Vec<EnumVariantIr>,
}

#[derive(Debug, Clone)]
pub struct EnumVariantIr {
    pub name: String,
    pub value: String,
    pub docs: Option<String>,
}

#[derive(Debug, Clone)]
pub struct OperationIr {
    pub shape_id: ShapeId,
    pub name: String,
    /// Value of the `X-Amz-Target` header.
    pub target: String,
    pub docs: Option<String>,
    pub input: String,
    pub output: String,
    /// Names of the error shapes the operation can return, in declaration order.
    pub errors: Vec<String>,
}

impl OperationIr {
    pub fn error_name(&self) -> String {
        format!("{}Error", self.name)
    }

    pub fn error_kind_name(&self) -> String {
        format!("{}ErrorKind", self.name)
    }
}

/// Everything generated for a single service.
#[derive(Debug, Clone)]
pub struct ServiceIndex {
    pub service: ShapeId,
    pub version: String,
    pub docs: Option<String>,
    pub operations: Vec<OperationIr>,
    pub structures: Vec<StructureIr>,
    pub enums: Vec<EnumIr>,
}

impl ServiceIndex {
    pub fn build(model: &Model, settings: &CodegenSettings) -> Result<ServiceIndex, CodegenError> {
        Indexer::new(model).index(&settings.service)
    }

    pub fn structures_in(&self, module: Module) -> impl Iterator<Item = &StructureIr> {
        self.structures
            .iter()
            .filter(move |structure| structure.module == module)
    }

    pub fn structure(&self, module: Module, name: &str) -> Option<&StructureIr> {
        self.structures_in(module)
            .find(|structure| structure.name == name)
    }
}

struct Indexer<'a> {
    model: &'a Model,
    names: BTreeMap<(Module, String), ShapeId>,
    structures: BTreeMap<ShapeId, StructureIr>,
    synthesized: Vec<StructureIr>,
    enums: BTreeMap<ShapeId, EnumIr>,
    queued: BTreeSet<ShapeId>,
    pending: VecDeque<ShapeId>,
}

impl<'a> Indexer<'a> {
    fn new(model: &'a Model) -> Self {
        Indexer {
            model,
            names: BTreeMap::new(),
            structures: BTreeMap::new(),
            synthesized: Vec::new(),
            enums: BTreeMap::new(),
            queued: BTreeSet::new(),
            pending: VecDeque::new(),
        }
    }

    fn index(mut self, service_id: &ShapeId) -> Result<ServiceIndex, CodegenError> {
        let model = self.model;
        let service = match model.expect_shape(service_id)? {
            Shape::Service(service) => service,
            _ => {
                return Err(CodegenError::UnexpectedShape {
                    id: service_id.clone(),
                    expected: "service",
                })
            }
        };
        if !service.traits.has(model::AWS_JSON_1_1) {
            return Err(CodegenError::Protocol(service_id.clone()));
        }
        if !service.resources.is_empty() {
            return Err(CodegenError::Unsupported {
                id: service_id.clone(),
                reason: "operations bound to resources are not supported".to_owned(),
            });
        }

        let mut operation_ids: Vec<&ShapeId> = service.operations.iter().map(|op| &op.target).collect();
        operation_ids.sort_by(|a, b| a.name().cmp(b.name()));
        operation_ids.dedup();

        let target_prefix = service_id.name();
        let mut operations = Vec::with_capacity(operation_ids.len());
        for operation_id in operation_ids {
            operations.push(self.operation(operation_id, target_prefix, &service.errors)?);
        }

        while let Some(id) = self.pending.pop_front() {
            let structure = self.named_structure(&id)?;
            self.structures.insert(id, structure);
        }

        let mut structures: Vec<StructureIr> = self.synthesized;
        structures.extend(self.structures.into_values());
        compute_derive_eq(&mut structures);
        structures.sort_by(|a, b| (a.module, &a.name).cmp(&(b.module, &b.name)));

        let mut enums: Vec<EnumIr> = self.enums.into_values().collect();
        enums.sort_by(|a, b| a.name.cmp(&b.name));

        debug!(
            operations = operations.len(),
            structures = structures.len(),
            enums = enums.len(),
            "indexed {}",
            service_id
        );
        Ok(ServiceIndex {
            service: service_id.clone(),
            version: service.version.clone(),
            docs: service.traits.documentation().map(str::to_owned),
            operations,
            structures,
            enums,
        })
    }

    fn operation(
        &mut self,
        id: &ShapeId,
        target_prefix: &str,
        service_errors: &[model::ShapeRef],
    ) -> Result<OperationIr, CodegenError> {
        let model = self.model;
        let operation = match model.expect_shape(id)? {
            Shape::Operation(operation) => operation,
            _ => {
                return Err(CodegenError::UnexpectedShape {
                    id: id.clone(),
                    expected: "operation",
                })
            }
        };
        let name = type_name(id.name());
        self.register(Module::Operation, name.clone(), id)?;

        let input = format!("{}Input", name);
        let output = format!("{}Output", name);
        let input_structure =
            self.operation_structure(id, operation.input.as_ref(), Module::Input, &input)?;
        let output_structure =
            self.operation_structure(id, operation.output.as_ref(), Module::Output, &output)?;
        self.synthesized.push(input_structure);
        self.synthesized.push(output_structure);

        let mut errors = Vec::new();
        for error in operation.errors.iter().chain(service_errors) {
            let error_name = type_name(error.target.name());
            if errors.contains(&error_name) {
                continue;
            }
            match model.expect_shape(&error.target)? {
                Shape::Structure(structure) if structure.traits.error().is_some() => {}
                _ => {
                    return Err(CodegenError::UnexpectedShape {
                        id: error.target.clone(),
                        expected: "error structure",
                    })
                }
            }
            self.enqueue(&error.target);
            errors.push(error_name);
        }

        let operation_ir = OperationIr {
            shape_id: id.clone(),
            target: format!("{}.{}", target_prefix, name),
            docs: operation.traits.documentation().map(str::to_owned),
            input,
            output,
            errors,
            name,
        };
        self.register(Module::Error, operation_ir.error_name(), id)?;
        self.register(Module::Error, operation_ir.error_kind_name(), id)?;
        Ok(operation_ir)
    }

    fn operation_structure(
        &mut self,
        operation: &ShapeId,
        shape: Option<&model::ShapeRef>,
        module: Module,
        name: &str,
    ) -> Result<StructureIr, CodegenError> {
        let model = self.model;
        let (shape_id, members, traits) = match shape {
            Some(shape) if shape.target.as_str() != UNIT => {
                match model.expect_shape(&shape.target)? {
                    Shape::Structure(structure) => {
                        (shape.target.clone(), Some(&structure.members), Some(&structure.traits))
                    }
                    _ => {
                        return Err(CodegenError::UnexpectedShape {
                            id: shape.target.clone(),
                            expected: "structure",
                        })
                    }
                }
            }
            _ => (operation.clone(), None, None),
        };
        self.register(module, name.to_owned(), &shape_id)?;
        let members = match members {
            Some(members) => self.members(&shape_id, members)?,
            None => Vec::new(),
        };
        let structure = StructureIr {
            docs: traits
                .and_then(Traits::documentation)
                .map(str::to_owned),
            shape_id,
            name: name.to_owned(),
            module,
            members,
            error: None,
            derive_eq: false,
        };
        self.register(module, structure.builder_module(), &structure.shape_id)?;
        Ok(structure)
    }

    fn named_structure(&mut self, id: &ShapeId) -> Result<StructureIr, CodegenError> {
        let model = self.model;
        let structure = match model.expect_shape(id)? {
            Shape::Structure(structure) => structure,
            other => {
                return Err(CodegenError::Unsupported {
                    id: id.clone(),
                    reason: format!("{} shapes are not supported", other.type_name()),
                })
            }
        };
        let error = structure.traits.error().map(str::to_owned);
        let module = if error.is_some() {
            Module::Error
        } else {
            Module::Model
        };
        let name = type_name(id.name());
        self.register(module, name.clone(), id)?;
        let members = self.members(id, &structure.members)?;
        let structure = StructureIr {
            shape_id: id.clone(),
            name,
            module,
            docs: structure.traits.documentation().map(str::to_owned),
            members,
            error,
            derive_eq: false,
        };
        self.register(module, structure.builder_module(), id)?;
        Ok(structure)
    }

    fn members(&mut self, owner: &ShapeId, members: &Members) -> Result<Vec<MemberIr>, CodegenError> {
        let mut stems: HashMap<String, &str> = HashMap::new();
        let mut resolved = Vec::with_capacity(members.len());
        for (wire_name, member) in members.iter() {
            let stem = naming::to_snake_case(wire_name);
            if stem.is_empty() || matches!(stem.as_str(), "build" | "builder" | "build_error") {
                return Err(CodegenError::Unsupported {
                    id: owner.clone(),
                    reason: format!("member `{}` collides with a generated method", wire_name),
                });
            }
            if let Some(previous) = stems.insert(stem.clone(), wire_name) {
                return Err(CodegenError::Unsupported {
                    id: owner.clone(),
                    reason: format!(
                        "members `{}` and `{}` both map to `{}`",
                        previous, wire_name, stem
                    ),
                });
            }
            let ty = self.member_type(owner, wire_name, member)?;
            resolved.push(MemberIr {
                wire_name: wire_name.to_owned(),
                field_name: naming::member_name(wire_name),
                stem,
                ty,
                docs: member.traits.documentation().map(str::to_owned),
                required: member.traits.is_required(),
            });
        }
        Ok(resolved)
    }

    fn member_type(
        &mut self,
        owner: &ShapeId,
        member_name: &str,
        member: &MemberShape,
    ) -> Result<RustType, CodegenError> {
        let model = self.model;
        let target = model.expect_shape(&member.target)?;
        let timestamp_format = member
            .traits
            .timestamp_format()
            .or_else(|| target.traits().timestamp_format());
        if let (Shape::Timestamp(_), Some(format)) = (target, timestamp_format) {
            if format != EPOCH_SECONDS {
                return Err(CodegenError::Unsupported {
                    id: ShapeId::new(format!("{}${}", owner, member_name)),
                    reason: format!("timestamp format `{}` is not supported", format),
                });
            }
        }
        self.resolve(&member.target)
    }

    fn resolve(&mut self, id: &ShapeId) -> Result<RustType, CodegenError> {
        let model = self.model;
        let shape = model.expect_shape(id)?;
        let ty = match shape {
            Shape::String(string) => match string.traits.enum_definitions() {
                Some(definitions) => {
                    let definitions = definitions.map_err(|err| CodegenError::Unsupported {
                        id: id.clone(),
                        reason: format!("malformed enum trait: {}", err),
                    })?;
                    self.enum_trait(id, &string.traits, &definitions)?
                }
                None => RustType::String,
            },
            Shape::Enum(enumeration) => self.enum_shape(id, &enumeration.members, &enumeration.traits)?,
            Shape::Boolean(_) => RustType::Bool,
            Shape::Byte(_) => RustType::I8,
            Shape::Short(_) => RustType::I16,
            Shape::Integer(_) => RustType::I32,
            Shape::Long(_) => RustType::I64,
            Shape::Float(_) => RustType::F32,
            Shape::Double(_) => RustType::F64,
            Shape::Timestamp(_) => RustType::Instant,
            Shape::List(list) => RustType::Vec(Box::new(self.resolve(&list.member.target)?)),
            Shape::Map(map) => {
                let key = self.resolve(&map.key.target)?;
                if !matches!(
                    key,
                    RustType::String
                        | RustType::Named {
                            kind: NamedKind::Enum,
                            ..
                        }
                ) {
                    return Err(CodegenError::Unsupported {
                        id: id.clone(),
                        reason: "map keys must be strings".to_owned(),
                    });
                }
                let value = self.resolve(&map.value.target)?;
                RustType::HashMap(Box::new(key), Box::new(value))
            }
            Shape::Structure(structure) => {
                let module = if structure.traits.error().is_some() {
                    Module::Error
                } else {
                    Module::Model
                };
                self.enqueue(id);
                RustType::Named {
                    module,
                    name: type_name(id.name()),
                    kind: NamedKind::Structure,
                }
            }
            other => {
                return Err(CodegenError::Unsupported {
                    id: id.clone(),
                    reason: format!("{} shapes are not supported", other.type_name()),
                })
            }
        };
        Ok(ty)
    }

    fn enum_trait(
        &mut self,
        id: &ShapeId,
        traits: &Traits,
        definitions: &[EnumDefinition],
    ) -> Result<RustType, CodegenError> {
        let variants = definitions
            .iter()
            .map(|definition| EnumVariantIr {
                name: naming::enum_variant_name(definition.name.as_deref().unwrap_or(&definition.value)),
                value: definition.value.clone(),
                docs: definition.documentation.clone(),
            })
            .collect();
        self.add_enum(id, traits, variants)
    }

    fn enum_shape(
        &mut self,
        id: &ShapeId,
        members: &Members,
        traits: &Traits,
    ) -> Result<RustType, CodegenError> {
        let variants = members
            .iter()
            .map(|(name, member)| EnumVariantIr {
                name: naming::enum_variant_name(name),
                value: member
                    .traits
                    .enum_value()
                    .and_then(|value| value.as_str())
                    .unwrap_or(name)
                    .to_owned(),
                docs: member.traits.documentation().map(str::to_owned),
            })
            .collect();
        self.add_enum(id, traits, variants)
    }

    fn add_enum(
        &mut self,
        id: &ShapeId,
        traits: &Traits,
        variants: Vec<EnumVariantIr>,
    ) -> Result<RustType, CodegenError> {
        let name = type_name(id.name());
        if !self.enums.contains_key(id) {
            let mut seen = BTreeSet::new();
            for variant in &variants {
                if !seen.insert(variant.name.as_str()) {
                    return Err(CodegenError::Unsupported {
                        id: id.clone(),
                        reason: format!("more than one value maps to variant `{}`", variant.name),
                    });
                }
            }
            self.register(Module::Model, name.clone(), id)?;
            self.enums.insert(
                id.clone(),
                EnumIr {
                    shape_id: id.clone(),
                    name: name.clone(),
                    docs: traits.documentation().map(str::to_owned),
                    variants,
                },
            );
        }
        Ok(RustType::Named {
            module: Module::Model,
            name,
            kind: NamedKind::Enum,
        })
    }

    fn enqueue(&mut self, id: &ShapeId) {
        if self.queued.insert(id.clone()) {
            self.pending.push_back(id.clone());
        }
    }

    fn register(&mut self, module: Module, name: String, id: &ShapeId) -> Result<(), CodegenError> {
        match self.names.get(&(module, name.clone())) {
            Some(existing) if existing != id => Err(CodegenError::NameConflict {
                module: module.name(),
                name,
                first: existing.clone(),
                second: id.clone(),
            }),
            Some(_) => Ok(()),
            None => {
                self.names.insert((module, name), id.clone());
                Ok(())
            }
        }
    }
}

/// Converts a shape name to a type name, capitalizing the first letter.
fn type_name(shape_name: &str) -> String {
    let mut chars = shape_name.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

/// Marks the structures that can derive `Eq` and `Hash`.
///
/// Floats and `HashMap`s rule both out, transitively through nested structures. Starts from
/// "every structure qualifies" and removes structures until nothing changes, which settles
/// recursive shapes as well.
fn compute_derive_eq(structures: &mut [StructureIr]) {
    let mut eligible: HashMap<(Module, String), bool> = structures
        .iter()
        .map(|structure| ((structure.module, structure.name.clone()), true))
        .collect();
    loop {
        let mut changed = false;
        for structure in structures.iter() {
            let key = (structure.module, structure.name.clone());
            if eligible.get(&key) == Some(&false) {
                continue;
            }
            let ok = structure
                .members
                .iter()
                .all(|member| type_supports_eq(&member.ty, &eligible));
            if !ok {
                eligible.insert(key, false);
                changed = true;
            }
        }
        if !changed {
            break;
        }
    }
    for structure in structures.iter_mut() {
        structure.derive_eq = eligible
            .get(&(structure.module, structure.name.clone()))
            .copied()
            .unwrap_or(false);
    }
}

fn type_supports_eq(ty: &RustType, eligible: &HashMap<(Module, String), bool>) -> bool {
    match ty {
        RustType::F32 | RustType::F64 | RustType::HashMap(..) => false,
        RustType::Vec(member) => type_supports_eq(member, eligible),
        RustType::Named {
            kind: NamedKind::Enum,
            ..
        } => true,
        RustType::Named {
            module,
            name,
            kind: NamedKind::Structure,
        } => eligible
            .get(&(*module, name.clone()))
            .copied()
            .unwrap_or(false),
        RustType::String
        | RustType::Bool
        | RustType::I8
        | RustType::I16
        | RustType::I32
        | RustType::I64
        | RustType::Instant => true,
    }
}

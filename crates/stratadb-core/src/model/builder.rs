use crate::model::{
    ModelMetadata,
    association::{AssociationEnd, AssociationEndId, AssociationKind, AssociationMetadata},
    entity::EntityMetadata,
};
use std::{collections::BTreeMap, sync::Arc};
use thiserror::Error as ThisError;

///
/// ModelError
///
/// Construction-time validation failures. Lookup misses at query time are
/// `None`, never errors; only an inconsistent declaration set fails.
///

#[derive(Debug, ThisError)]
pub enum ModelError {
    #[error("duplicate association end '{link_name}' on entity kind '{kind}'")]
    DuplicateAssociationEnd { kind: String, link_name: String },

    #[error("duplicate entity kind '{kind}'")]
    DuplicateEntityKind { kind: String },

    #[error("unknown entity kind '{kind}'")]
    UnknownEntityKind { kind: String },
}

///
/// ModelBuilder
///
/// Fluent assembly of a `ModelMetadata`. Declarations are collected first and
/// validated as a whole in `build`, so declaration order does not matter.
///

#[derive(Debug, Default)]
pub struct ModelBuilder {
    entities: Vec<String>,
    sub_types: Vec<(String, String)>,
    associations: Vec<AssociationDecl>,
}

#[derive(Debug)]
enum AssociationDecl {
    Directed {
        source_kind: String,
        link_name: String,
        target_kind: String,
    },
    Bidirectional {
        source_kind: String,
        link_name: String,
        target_kind: String,
        target_link: String,
    },
}

impl ModelBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare an entity kind.
    #[must_use]
    pub fn entity(mut self, kind: &str) -> Self {
        self.entities.push(kind.to_owned());
        self
    }

    /// Declare `sub` as a specialization of `base`. Registers `sub` as an
    /// entity kind and flags `base` as having sub-types.
    #[must_use]
    pub fn sub_type(mut self, base: &str, sub: &str) -> Self {
        self.entities.push(sub.to_owned());
        self.sub_types.push((base.to_owned(), sub.to_owned()));
        self
    }

    /// Declare a one-way association from `source_kind.link_name` to
    /// `target_kind`. The target side carries no mirror end.
    #[must_use]
    pub fn directed(mut self, source_kind: &str, link_name: &str, target_kind: &str) -> Self {
        self.associations.push(AssociationDecl::Directed {
            source_kind: source_kind.to_owned(),
            link_name: link_name.to_owned(),
            target_kind: target_kind.to_owned(),
        });
        self
    }

    /// Declare a two-way association: `source_kind.link_name` mirrored by
    /// `target_kind.target_link`.
    #[must_use]
    pub fn bidirectional(
        mut self,
        source_kind: &str,
        link_name: &str,
        target_kind: &str,
        target_link: &str,
    ) -> Self {
        self.associations.push(AssociationDecl::Bidirectional {
            source_kind: source_kind.to_owned(),
            link_name: link_name.to_owned(),
            target_kind: target_kind.to_owned(),
            target_link: target_link.to_owned(),
        });
        self
    }

    /// Validate the declaration set and assemble the model.
    pub fn build(self) -> Result<ModelMetadata, ModelError> {
        let mut entities = BTreeMap::new();

        for kind in self.entities {
            if entities.contains_key(&kind) {
                return Err(ModelError::DuplicateEntityKind { kind });
            }
            entities.insert(kind.clone(), EntityMetadata::new(kind));
        }

        for (base, _sub) in &self.sub_types {
            let Some(entity) = entities.get_mut(base) else {
                return Err(ModelError::UnknownEntityKind { kind: base.clone() });
            };
            entity.mark_sub_types();
        }

        for decl in self.associations {
            match decl {
                AssociationDecl::Directed {
                    source_kind,
                    link_name,
                    target_kind,
                } => {
                    check_kind(&entities, &target_kind)?;
                    let association = Arc::new(AssociationMetadata::new(
                        AssociationKind::Directed,
                        vec![AssociationEndId::new(&source_kind, &link_name)],
                    ));
                    insert_end(
                        &mut entities,
                        AssociationEnd::new(&source_kind, &link_name, target_kind, association),
                    )?;
                }
                AssociationDecl::Bidirectional {
                    source_kind,
                    link_name,
                    target_kind,
                    target_link,
                } => {
                    let association = Arc::new(AssociationMetadata::new(
                        AssociationKind::Bidirectional,
                        vec![
                            AssociationEndId::new(&source_kind, &link_name),
                            AssociationEndId::new(&target_kind, &target_link),
                        ],
                    ));
                    let symmetric = source_kind == target_kind && link_name == target_link;
                    insert_end(
                        &mut entities,
                        AssociationEnd::new(
                            &source_kind,
                            &link_name,
                            &target_kind,
                            Arc::clone(&association),
                        ),
                    )?;
                    if !symmetric {
                        insert_end(
                            &mut entities,
                            AssociationEnd::new(&target_kind, &target_link, source_kind, association),
                        )?;
                    }
                }
            }
        }

        Ok(ModelMetadata::new(entities))
    }
}

fn check_kind(entities: &BTreeMap<String, EntityMetadata>, kind: &str) -> Result<(), ModelError> {
    if entities.contains_key(kind) {
        Ok(())
    } else {
        Err(ModelError::UnknownEntityKind {
            kind: kind.to_owned(),
        })
    }
}

fn insert_end(
    entities: &mut BTreeMap<String, EntityMetadata>,
    end: AssociationEnd,
) -> Result<(), ModelError> {
    let Some(entity) = entities.get_mut(end.entity_kind()) else {
        return Err(ModelError::UnknownEntityKind {
            kind: end.entity_kind().to_owned(),
        });
    };

    let kind = end.entity_kind().to_owned();
    let link_name = end.link_name().to_owned();
    if entity.insert_end(end) {
        Ok(())
    } else {
        Err(ModelError::DuplicateAssociationEnd { kind, link_name })
    }
}

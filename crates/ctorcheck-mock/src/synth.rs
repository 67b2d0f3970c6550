//! Mock synthesis policy
//!
//! One value per declared factory parameter, chosen by the first matching
//! rule:
//!
//! 1. position 0 → options stub (the leading parameter is always the
//!    structured configuration object);
//! 2. `Sequence` → one-element sequence holding a tagged placeholder;
//! 3. `Capability(id)` with a registered stub → fresh stub instance;
//! 4. `Untyped` → tagged placeholder string;
//! 5. anything else → [`SynthesisError::UnrecognizedParameterType`].
//!
//! A running counter feeds every placeholder tag, so no two synthesized
//! values can ever collide by content, let alone by identity.

use crate::registry::StubRegistry;
use crate::value::{MockArgumentSet, MockValue, OptionsStub};
use ctorcheck_schema::{ConstructorSchema, ParamKind};
use std::sync::Arc;

/// Errors from mock synthesis
#[derive(Debug, thiserror::Error)]
pub enum SynthesisError {
    /// A declared parameter type has no synthesis rule
    #[error(
        "unrecognized parameter type {type_name} at position {position} \
         in {owner} constructor"
    )]
    UnrecognizedParameterType {
        /// Type owning the constructor being synthesized for
        owner: String,
        /// Description of the offending declared type
        type_name: String,
        /// Position of the offending parameter
        position: usize,
    },
}

/// Synthesizes one [`MockArgumentSet`] per factory schema
#[derive(Debug)]
pub struct MockSynthesizer<'r> {
    registry: &'r StubRegistry,
    counter: usize,
}

impl<'r> MockSynthesizer<'r> {
    /// Create a synthesizer backed by the given stub registry
    #[must_use]
    pub fn new(registry: &'r StubRegistry) -> Self {
        Self {
            registry,
            counter: 0,
        }
    }

    /// Synthesize one argument per declared parameter
    ///
    /// # Errors
    /// [`SynthesisError::UnrecognizedParameterType`] naming the offending
    /// type and position when a parameter matches no synthesis rule.
    pub fn synthesize(
        &mut self,
        schema: &ConstructorSchema,
    ) -> Result<MockArgumentSet, SynthesisError> {
        let mut args = MockArgumentSet::new();

        for (position, param) in schema.params().enumerate() {
            let value = if position == 0 {
                MockValue::Options(Arc::new(OptionsStub::new(self.tagged("options stub"))))
            } else {
                match &param.kind {
                    ParamKind::Sequence => {
                        MockValue::Sequence(Arc::from(vec![self.tagged("sequence entry")]))
                    }
                    ParamKind::Capability(id) => match self.registry.instantiate(id) {
                        Some(stub) => MockValue::Capability(stub),
                        None => {
                            return Err(SynthesisError::UnrecognizedParameterType {
                                owner: schema.owner().to_string(),
                                type_name: param.kind.describe(),
                                position,
                            })
                        }
                    },
                    ParamKind::Untyped => {
                        // Optimistically assume a string is okay.
                        MockValue::Text(Arc::from(self.tagged("untyped argument")))
                    }
                    ParamKind::Options | ParamKind::Other(_) => {
                        return Err(SynthesisError::UnrecognizedParameterType {
                            owner: schema.owner().to_string(),
                            type_name: param.kind.describe(),
                            position,
                        })
                    }
                }
            };

            tracing::debug!(
                position,
                param = %param.name,
                kind = value.kind_name(),
                "synthesized mock argument"
            );
            args.push(param.kind.clone(), value);
        }

        Ok(args)
    }

    fn tagged(&mut self, what: &str) -> String {
        let n = self.counter;
        self.counter += 1;
        format!("{what} #{n}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ctorcheck_schema::CapabilityId;
    use proptest::prelude::*;

    fn wiki_like_schema() -> ConstructorSchema {
        ConstructorSchema::new("WikitextParserFactory")
            .with_param("options", ParamKind::Options)
            .with_param("interwiki_prefixes", ParamKind::Sequence)
            .with_param(
                "magic_word_factory",
                ParamKind::Capability(CapabilityId::new("magic-word-factory")),
            )
            .with_param(
                "content_language",
                ParamKind::Capability(CapabilityId::new("language")),
            )
            .with_param("url_protocols", ParamKind::Untyped)
    }

    #[test]
    fn synthesize_covers_every_parameter() {
        let registry = StubRegistry::with_defaults();
        let mut synth = MockSynthesizer::new(&registry);

        let args = synth.synthesize(&wiki_like_schema()).unwrap();

        assert_eq!(args.len(), 5);
        assert!(matches!(args.get(0).unwrap().value, MockValue::Options(_)));
        assert!(matches!(args.get(1).unwrap().value, MockValue::Sequence(_)));
        assert!(matches!(args.get(2).unwrap().value, MockValue::Capability(_)));
        assert!(matches!(args.get(4).unwrap().value, MockValue::Text(_)));
    }

    #[test]
    fn synthesized_arguments_are_pairwise_distinct() {
        let registry = StubRegistry::with_defaults();
        let mut synth = MockSynthesizer::new(&registry);

        let args = synth.synthesize(&wiki_like_schema()).unwrap();
        assert!(args.pairwise_distinct());
    }

    #[test]
    fn placeholder_tags_carry_running_counter() {
        let registry = StubRegistry::with_defaults();
        let mut synth = MockSynthesizer::new(&registry);

        let schema = ConstructorSchema::new("F")
            .with_param("options", ParamKind::Options)
            .with_param("a", ParamKind::Untyped)
            .with_param("b", ParamKind::Untyped);
        let args = synth.synthesize(&schema).unwrap();

        let MockValue::Text(a) = &args.get(1).unwrap().value else {
            panic!("expected text");
        };
        let MockValue::Text(b) = &args.get(2).unwrap().value else {
            panic!("expected text");
        };
        assert_ne!(a, b);
        assert!(a.contains('#'));
    }

    #[test]
    fn unrecognized_type_fails_with_name_and_position() {
        let registry = StubRegistry::with_defaults();
        let mut synth = MockSynthesizer::new(&registry);

        let schema = ConstructorSchema::new("WikitextParserFactory")
            .with_param("options", ParamKind::Options)
            .with_param("handle", ParamKind::Other("resource handle".into()));
        let err = synth.synthesize(&schema).unwrap_err();

        let msg = err.to_string();
        assert!(msg.contains("resource handle"));
        assert!(msg.contains("position 1"));
        assert!(msg.contains("WikitextParserFactory"));
    }

    #[test]
    fn unregistered_capability_fails() {
        let registry = StubRegistry::new();
        let mut synth = MockSynthesizer::new(&registry);

        let schema = ConstructorSchema::new("F")
            .with_param("options", ParamKind::Options)
            .with_param("lang", ParamKind::Capability(CapabilityId::new("language")));
        let err = synth.synthesize(&schema).unwrap_err();
        assert!(err.to_string().contains("capability 'language'"));
    }

    #[test]
    fn options_outside_position_zero_is_unrecognized() {
        let registry = StubRegistry::with_defaults();
        let mut synth = MockSynthesizer::new(&registry);

        let schema = ConstructorSchema::new("F")
            .with_param("options", ParamKind::Options)
            .with_param("more_options", ParamKind::Options);
        assert!(synth.synthesize(&schema).is_err());
    }

    fn arbitrary_kind() -> impl Strategy<Value = ParamKind> {
        prop_oneof![
            Just(ParamKind::Sequence),
            Just(ParamKind::Untyped),
            Just(ParamKind::Capability(CapabilityId::new("language"))),
            Just(ParamKind::Capability(CapabilityId::new("site-config"))),
        ]
    }

    proptest! {
        #[test]
        fn any_recognized_schema_yields_distinct_mocks(
            kinds in proptest::collection::vec(arbitrary_kind(), 0..24)
        ) {
            let registry = StubRegistry::with_defaults();
            let mut schema = ConstructorSchema::new("F");
            schema.push("options", ParamKind::Options);
            for (i, kind) in kinds.iter().enumerate() {
                schema.push(format!("param_{i}"), kind.clone());
            }

            let mut synth = MockSynthesizer::new(&registry);
            let args = synth.synthesize(&schema).unwrap();
            prop_assert_eq!(args.len(), kinds.len() + 1);
            prop_assert!(args.pairwise_distinct());
        }
    }
}

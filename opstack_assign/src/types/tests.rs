use super::*;

#[test]
fn parses_primitive_descriptors() {
    for kind in PrimitiveKind::ALL {
        let parsed = TypeDescription::from_descriptor(&kind.descriptor().to_string()).unwrap();
        assert_eq!(parsed, TypeDescription::Primitive(kind));
    }
}

#[test]
fn parses_void_descriptor() {
    assert_eq!(
        TypeDescription::from_descriptor("V").unwrap(),
        TypeDescription::Void
    );
}

#[test]
fn parses_class_descriptors() {
    assert_eq!(
        TypeDescription::from_descriptor("Ljava/lang/Object;").unwrap(),
        TypeDescription::object()
    );
    assert_eq!(
        TypeDescription::from_descriptor("Ljava/lang/Integer;").unwrap(),
        TypeDescription::wrapper(PrimitiveKind::Int)
    );
}

#[test]
fn parses_array_descriptors() {
    assert_eq!(
        TypeDescription::from_descriptor("[I").unwrap(),
        TypeDescription::reference("[I")
    );
    assert_eq!(
        TypeDescription::from_descriptor("[[Ljava/lang/Object;").unwrap(),
        TypeDescription::reference("[[Ljava/lang/Object;")
    );
}

#[test]
fn rejects_malformed_descriptors() {
    assert_eq!(
        TypeDescription::from_descriptor(""),
        Err(DescriptorError::Empty)
    );
    assert_eq!(
        TypeDescription::from_descriptor("Q"),
        Err(DescriptorError::UnknownTag('Q'))
    );
    assert_eq!(
        TypeDescription::from_descriptor("Ljava/lang/Object"),
        Err(DescriptorError::UnterminatedClass("Ljava/lang/Object".to_string()))
    );
    assert_eq!(
        TypeDescription::from_descriptor("[V"),
        Err(DescriptorError::ArrayOfVoid("[V".to_string()))
    );
    assert_eq!(
        TypeDescription::from_descriptor("II"),
        Err(DescriptorError::TrailingInput("II".to_string()))
    );
}

#[test]
fn descriptor_round_trips() {
    for descriptor in ["V", "I", "J", "Ljava/lang/Object;", "[I", "[[D"] {
        let parsed = TypeDescription::from_descriptor(descriptor).unwrap();
        assert_eq!(parsed.descriptor(), descriptor);
    }
}

#[test]
fn wrapper_recognition() {
    assert_eq!(
        TypeDescription::wrapper(PrimitiveKind::Char).wrapper_kind(),
        Some(PrimitiveKind::Char)
    );
    assert_eq!(TypeDescription::object().wrapper_kind(), None);
    assert_eq!(
        TypeDescription::Primitive(PrimitiveKind::Int).wrapper_kind(),
        None
    );
    assert_eq!(
        PrimitiveKind::from_wrapper_class("java/lang/Character"),
        Some(PrimitiveKind::Char)
    );
    assert_eq!(PrimitiveKind::from_wrapper_class("java/lang/String"), None);
}

#[test]
fn stack_sizes() {
    assert_eq!(TypeDescription::Void.stack_size(), StackSize::Zero);
    assert_eq!(
        TypeDescription::Primitive(PrimitiveKind::Long).stack_size(),
        StackSize::Double
    );
    assert_eq!(
        TypeDescription::Primitive(PrimitiveKind::Float).stack_size(),
        StackSize::Single
    );
    assert_eq!(TypeDescription::object().stack_size(), StackSize::Single);
}

#[test]
fn displays_source_language_names() {
    assert_eq!(TypeDescription::Void.to_string(), "void");
    assert_eq!(
        TypeDescription::Primitive(PrimitiveKind::Boolean).to_string(),
        "boolean"
    );
    assert_eq!(TypeDescription::object().to_string(), "java/lang/Object");
}

#[test]
fn boxing_and_unboxing_metadata_agree() {
    for kind in PrimitiveKind::ALL {
        let boxing = kind.boxing_method();
        let unboxing = kind.unboxing_method();
        assert_eq!(boxing.owner, kind.wrapper_class());
        assert_eq!(unboxing.owner, kind.wrapper_class());
        assert_eq!(boxing.name, "valueOf");
        // The factory consumes the primitive and returns the wrapper; the
        // accessor does the reverse.
        assert!(boxing.descriptor.starts_with(&format!("({}", kind.descriptor())));
        assert!(unboxing.descriptor.ends_with(kind.descriptor()));
    }
}

#[test]
#[should_panic(expected = "not a non-void primitive type")]
fn kind_of_reference_type_panics() {
    PrimitiveKind::of(&TypeDescription::object());
}

#[test]
#[should_panic(expected = "not a non-void primitive type")]
fn kind_of_void_panics() {
    PrimitiveKind::of(&TypeDescription::Void);
}

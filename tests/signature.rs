use jcall::{BridgeError, Signature, TypeTag};

#[test]
fn parses_primitive_args_and_return() {
    let sig = Signature::parse("(II)I").expect("parse");
    assert_eq!(sig.args, vec![TypeTag::Int, TypeTag::Int]);
    assert_eq!(sig.ret, TypeTag::Int);
}

#[test]
fn parses_empty_args_void_return() {
    let sig = Signature::parse("()V").expect("parse");
    assert!(sig.args.is_empty());
    assert_eq!(sig.ret, TypeTag::Void);
}

#[test]
fn parses_every_primitive_code() {
    let sig = Signature::parse("(ZBCSIJFD)V").expect("parse");
    assert_eq!(
        sig.args,
        vec![
            TypeTag::Boolean,
            TypeTag::Byte,
            TypeTag::Char,
            TypeTag::Short,
            TypeTag::Int,
            TypeTag::Long,
            TypeTag::Float,
            TypeTag::Double,
        ]
    );
}

#[test]
fn parses_object_and_array_descriptors() {
    let sig = Signature::parse("([[ILjava/lang/String;J)[B").expect("parse");
    assert_eq!(
        sig.args,
        vec![
            TypeTag::Ref("[[I".to_string()),
            TypeTag::Ref("Ljava/lang/String;".to_string()),
            TypeTag::Long,
        ]
    );
    assert_eq!(sig.ret, TypeTag::Ref("[B".to_string()));
}

#[test]
fn array_of_objects_keeps_full_descriptor() {
    let sig = Signature::parse("([Ljava/lang/Object;)V").expect("parse");
    assert_eq!(sig.args, vec![TypeTag::Ref("[Ljava/lang/Object;".to_string())]);
}

#[test]
fn class_name_strips_l_and_semicolon() {
    let tag = Signature::parse_tag("Ljava/lang/String;").expect("parse");
    assert_eq!(tag.class_name(), Some("java/lang/String"));

    // Array classes resolve by their descriptor.
    let tag = Signature::parse_tag("[[D").expect("parse");
    assert_eq!(tag.class_name(), Some("[[D"));

    assert_eq!(TypeTag::Int.class_name(), None);
}

#[test]
fn render_round_trips() {
    for text in [
        "()V",
        "(II)I",
        "(ZBCSIJFD)V",
        "([[ILjava/lang/String;J)[B",
        "(Ljava/util/Map;[J)Ljava/lang/Object;",
    ] {
        let sig = Signature::parse(text).expect("parse");
        assert_eq!(sig.to_string(), text);
        assert_eq!(Signature::parse(&sig.to_string()).expect("reparse"), sig);
    }
}

#[test]
fn parsing_is_deterministic() {
    let a = Signature::parse("(Ljava/lang/String;I)[J").unwrap();
    let b = Signature::parse("(Ljava/lang/String;I)[J").unwrap();
    assert_eq!(a, b);
}

fn assert_malformed(text: &str) {
    match Signature::parse(text) {
        Err(BridgeError::MalformedSignature { sig, .. }) => assert_eq!(sig, text),
        other => panic!("expected MalformedSignature for {text:?}, got {other:?}"),
    }
}

#[test]
fn rejects_missing_open_paren() {
    assert_malformed("II)I");
    assert_malformed("");
}

#[test]
fn rejects_missing_close_paren() {
    assert_malformed("(II");
}

#[test]
fn rejects_missing_return_type() {
    assert_malformed("(II)");
}

#[test]
fn rejects_unterminated_class_name() {
    assert_malformed("(Ljava/lang/String)V");
    assert_malformed("(I)Ljava/lang/String");
}

#[test]
fn rejects_unknown_type_code() {
    assert_malformed("(X)V");
    assert_malformed("(I)Q");
}

#[test]
fn rejects_trailing_characters() {
    assert_malformed("(I)II");
    assert_malformed("()VV");
}

#[test]
fn rejects_truncated_array() {
    assert_malformed("()[");
    assert_malformed("([)V");
}

#[test]
fn field_tag_rejects_trailing_text() {
    assert!(Signature::parse_tag("I").is_ok());
    assert!(matches!(
        Signature::parse_tag("II"),
        Err(BridgeError::MalformedSignature { .. })
    ));
}

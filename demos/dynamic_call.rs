//! Demo: embed a JVM and drive it with signature-based calls only.
//!
//! Run with:
//!   JAVA_HOME=/path/to/jdk cargo run --example dynamic_call

use jcall::prelude::*;

fn main() {
    env_logger::init();

    // One-time bring-up; exits the process with a diagnostic on failure.
    create_runtime("-Xmx128m");

    let sum = invoke_static(
        "java.lang.Integer",
        "sum",
        "(II)I",
        &[JvmValue::Int(5), JvmValue::Int(7)],
    );
    println!("Integer.sum(5, 7) = {sum:?}");

    let greeting = box_text("héllo from rust \u{1F600}").expect("box_text");
    let upper = invoke_instance(
        "java.lang.String",
        "toUpperCase",
        "()Ljava/lang/String;",
        &greeting,
        &[],
    )
    .expect("toUpperCase");
    println!("upper = {:?}", unbox_text(&upper).expect("unbox_text"));

    // A thrown exception is a value, and the thread stays usable.
    let bad = box_text("not a number").expect("box_text");
    let err = invoke_static(
        "java.lang.Integer",
        "parseInt",
        "(Ljava/lang/String;)I",
        &[bad],
    );
    println!("Integer.parseInt(\"not a number\") = {err:?}");

    let arr = array_new("I", &[JvmValue::Int(1), JvmValue::Int(2), JvmValue::Int(3)])
        .expect("array_new");
    println!(
        "array len = {:?}, [1] = {:?}",
        array_length(&arr),
        array_get(&arr, 1, "I")
    );

    destroy_runtime();
}

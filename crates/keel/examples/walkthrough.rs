//! Tour of the Keel containers: appends of every flavour, growth,
//! cursor iteration and fixed arrays.
//!
//! Run with reallocation tracing on stderr:
//!
//! ```sh
//! cargo run -p keel --example walkthrough
//! ```

use keel::prelude::*;
use keel_test_utils::Vec3;
use log::LevelFilter;

fn main() {
    if let Err(err) = simple_logger::SimpleLogger::new()
        .with_level(LevelFilter::Trace)
        .without_timestamps()
        .init()
    {
        eprintln!("logger unavailable: {err}");
    }

    println!("Strings, appended one after another:");
    let mut words: DynamicArray<String> = DynamicArray::new();
    for word in ["Cherno", "C++", "Series", "Vector", "Vector", "Vector"] {
        words.push(word.to_string());
    }
    print!("{}", render(&words));

    println!("\nVec3 values appended by clone:");
    let mut by_clone = DynamicArray::new();
    let originals = [Vec3::splat(1.0), Vec3::new(2.0, 3.0, 4.0), Vec3::default()];
    for v in &originals {
        by_clone.push_clone(v);
    }
    print!("{}", render(&by_clone));

    println!("\nVec3 values appended by move:");
    let mut by_move = DynamicArray::new();
    by_move.push(Vec3::from(1.0f32));
    by_move.push(Vec3::from((2.0f32, 3.0f32, 4.0f32)));
    by_move.push(Vec3::default());
    print!("{}", render(&by_move));

    println!("\nVec3 values constructed in place:");
    let mut emplaced: DynamicArray<Vec3> = DynamicArray::new();
    emplaced.emplace(1.0f32);
    emplaced.emplace((2.0f32, 3.0f32, 4.0f32));
    emplaced.emplace_with(Vec3::default);
    print!("{}", render(&emplaced));

    println!("\nRemoving from the end, then clearing:");
    emplaced.remove_last();
    println!("size after remove_last: {}", emplaced.size());
    emplaced.clear();
    println!(
        "size after clear: {} (capacity still {})",
        emplaced.size(),
        emplaced.capacity()
    );

    let mut values: DynamicArray<i32> = DynamicArray::new();
    for i in 0..5 {
        values.emplace(i);
    }

    println!("\nRange-based iteration:");
    for value in &values {
        println!("value: {value}");
    }

    println!("\nCursor-based iteration:");
    let mut it = values.begin();
    while it != values.end() {
        println!("value: {}", *it.post_step_forward());
    }

    println!("\nShrinking below the live count drops the tail:");
    values.reallocate(3);
    print!("{}", render(&values));

    println!("\nFixed array of ints, default-initialised then written:");
    let mut ints: FixedArray<i32, 5> = FixedArray::new();
    for idx in 0..ints.size() {
        println!("[{idx}]: {}", ints[idx]);
    }
    ints.fill(0);
    for (idx, slot) in ints.iter_mut().enumerate() {
        *slot = (idx * idx) as i32;
    }
    print!("{}", render(&ints));

    println!("\nFixed array of strings:");
    let mut names: FixedArray<String, 2> = FixedArray::new();
    names[0] = "Cherno".to_string();
    names[1] = "C++".to_string();
    for idx in 0..names.size() {
        println!("[{idx}]: {}", names[idx]);
    }
}

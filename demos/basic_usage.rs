//! Basic example: build, extend, look up and walk a linked sequence.

use linkseq::{LinkedSequence, RenderConfig, Step};

fn main() -> anyhow::Result<()> {
    let list = LinkedSequence::from_slice(&[1, 2, 3]);
    println!("{list}");
    println!("to_vec: {:?}", list.to_vec());

    let extended = list.prepend(0);
    println!("prepend(0): {}", extended.render(&RenderConfig::flat()));

    println!("nth(1) = {:?}", list.nth(1));
    println!("nth(5) = {:?}", list.nth(5));
    let value = list.try_nth(2)?;
    println!("try_nth(2) = {value}");

    for element in &list {
        println!("element {element}");
    }

    // Past the end the cursor keeps reporting the terminal marker.
    let mut cursor = list.iterate();
    loop {
        match cursor.step() {
            Step::Yielded(value) => println!("step: {value}"),
            Step::Finished => break,
        }
    }
    assert!(cursor.step().is_finished());

    let letters: LinkedSequence<char> = "PCI".chars().collect();
    println!("spread: {:?}", linkseq::spread(&letters));

    Ok(())
}

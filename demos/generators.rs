//! Lazy generators feeding linked sequences.

use linkseq::{fibonacci, powers, range, sum, IdGenerator, LinkedSequence, RenderConfig};

fn main() -> anyhow::Result<()> {
    let flat = RenderConfig::flat();

    let small_powers: LinkedSequence<u64> = powers(3).take_while(|&p| p <= 50).collect();
    println!("powers of 3 up to 50: {}", small_powers.render(&flat));

    let fib: LinkedSequence<u64> = fibonacci(50).collect();
    println!("fibonacci up to 50: {}", fib.render(&flat));

    let mut ids = IdGenerator::new();
    println!("ids: {:?} {:?} {:?}", ids.next(), ids.next(), ids.next());

    let one_to_ten: LinkedSequence<i64> = range(1, 10, 1)?.collect();
    println!("sum(range(1, 10)) = {:?}", sum(&one_to_ten));

    let countdown: LinkedSequence<i64> = range(5, 2, -1)?.collect();
    println!("range(5, 2, -1): {}", countdown.render(&flat));
    println!("reversed: {}", countdown.reverse().render(&flat));

    Ok(())
}

//! Example: element matrices, assembly and reordering
//!
//! Walks through the basic workflow:
//!
//! - Construct one element of each kind and print its transfer matrix
//! - Assemble them into a beamline, compile, and inspect the sorted order
//! - Reposition an element, recompile, and watch the order change
//! - Compose the transfer matrix across an arbitrary interval
//!
//! **Sample devices** (literature-flavored toy values):
//! - Q1: quadrupole, L = 0.2 m, K1 = +2.0 /m²
//! - Q2: quadrupole, L = 0.2 m, K1 = −2.0 /m², centered at 1.0 m
//! - Sol1: solenoid, L = 0.5 m, K = 1.4 /m, centered at 2.0 m
//! - S_bend1: sector bend, L = 0.6 m, α = 0.31 rad, centered at 3.0 m

use beam_rs::beamline::Beamline;
use beam_rs::elements::{Element, ElementKind};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("═══════════════════════════════════════════════════════");
    println!("  beam-rs: element matrices and beamline assembly");
    println!("═══════════════════════════════════════════════════════\n");

    // ====== Element construction ======

    let q1 = Element::quadrupole("Q1", 0.2, 0.0, 2.0)?;
    let q2 = Element::quadrupole("Q2", 0.2, 1.0, -2.0)?;
    let sol1 = Element::solenoid("Sol1", 0.5, 2.0, 1.4)?;
    let s_bend1 = Element::sector_bend("S_bend1", 0.6, 3.0, 0.31)?;

    for element in [&q1, &q2, &sol1, &s_bend1] {
        let strength = match element.kind() {
            ElementKind::Drift(_) => String::from("-"),
            ElementKind::Quadrupole(q) => format!("K1 = {} 1/m^2", q.k1),
            ElementKind::Solenoid(s) => format!("K = {} 1/m", s.k),
            ElementKind::SectorBend(b) => format!("alpha = {} rad", b.angle),
        };
        println!(
            "{}: L = {} m, center = {} m, {}",
            element,
            element.length(),
            element.center(),
            strength
        );
        println!("matrix =\n{}", element.matrix());
    }

    // ====== Beamline assembly ======

    println!("═══════════════════════════════════════════════════════");
    println!("  Assembly and compilation");
    println!("═══════════════════════════════════════════════════════\n");

    let mut channel = Beamline::named("channel 1");
    channel.push(q1);
    channel.push(q2);
    channel.push(sol1);
    channel.push(s_bend1);
    channel.compile();

    println!("beamline '{}' in sorted order:", channel.name().unwrap());
    for element in channel.iter_sorted()? {
        println!(
            "  {:<22} ({:.2} m .. {:.2} m)",
            element.to_string(),
            element.start(),
            element.end()
        );
    }

    let (span_start, span_end) = channel.span()?.unwrap();
    println!("\ncovered span: {:.2} m .. {:.2} m", span_start, span_end);

    match channel.element_at(1.0)? {
        Some(element) => println!("element at s = 1.0 m: {}", element),
        None => println!("element at s = 1.0 m: none"),
    }

    // ====== Interval composition ======

    println!("\n═══════════════════════════════════════════════════════");
    println!("  Composite transfer matrix");
    println!("═══════════════════════════════════════════════════════\n");

    let m = channel.matrix_between(-0.5, 3.5)?;
    println!("M(-0.5 m -> 3.5 m) =\n{}", m);

    let backward = channel.matrix_between(3.5, -0.5)?;
    println!("round trip consistency: |M_back * M - I| small in every entry");
    let round_trip = backward * m;
    println!("round trip diagonal: {:?}", (0..6).map(|i| round_trip[(i, i)]).collect::<Vec<_>>());

    // ====== Reordering ======

    println!("\n═══════════════════════════════════════════════════════");
    println!("  Repositioning Q2 to -1.0 m");
    println!("═══════════════════════════════════════════════════════\n");

    channel.element_mut(1).unwrap().set_center(-1.0);
    channel.compile();

    println!("sorted order after recompile:");
    for element in channel.iter_sorted()? {
        println!("  {:<22} center = {:.2} m", element.to_string(), element.center());
    }

    Ok(())
}

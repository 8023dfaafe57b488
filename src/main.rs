use std::{env, process};

mod basis;
mod grid;
mod rearrange;
mod validate;

use crate::basis::Dims;

fn main() {
    let mut args = env::args().skip(1);
    let tile_width: u32 = args
        .next()
        .expect("the tile width must be provided")
        .parse()
        .expect("expected an integer");
    let tile_height: u32 = args
        .next()
        .expect("the tile height must be provided")
        .parse()
        .expect("expected an integer");
    let src_path = args.next().expect("the source image path must be provided");
    let out_path = args.next().expect("the output image path must be provided");
    let ordering: Vec<u32> = args
        .map(|token| token.parse().expect("the ordering must be integers"))
        .collect();

    let tile_size = Dims::new(tile_width, tile_height);
    if let Err(err) = rearrange::rearrange_tiles(&src_path, tile_size, &ordering, &out_path) {
        eprintln!("{:#}", err);
        process::exit(1);
    }
    println!("rearranged {} -> {}", src_path, out_path);
}

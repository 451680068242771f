//! `layers demo`: run seeded random tensors through the forward-pass
//! building blocks and print shapes and summary statistics.

use anyhow::Result;
use ndarray::{s, Array4};

use nabla_layers::init::{randn1, randn4};
use nabla_layers::{conv_forward, pool_forward, zero_pad, ConvParams, PoolMode, PoolParams};

pub fn run_demo(seed: u64) -> Result<()> {
    padding_demo(seed);
    conv_demo(seed)?;
    pooling_demo(seed)?;
    Ok(())
}

fn padding_demo(seed: u64) {
    println!("=== zero padding ===");
    let x = randn4((4, 3, 3, 2), seed);
    let x_pad = zero_pad(&x, 2);
    println!("x.shape = {:?}", x.dim());
    println!("x_pad.shape = {:?}", x_pad.dim());
    println!("x[1, 1] = {:?}", x.slice(s![1, 1, .., ..]));
    println!("x_pad[1, 1] = {:?}", x_pad.slice(s![1, 1, .., ..]));
    println!();
}

fn conv_demo(seed: u64) -> Result<()> {
    println!("=== convolution forward ===");
    let a_prev = randn4((10, 4, 4, 3), seed);
    let weights = randn4((2, 2, 3, 8), seed + 1);
    let bias = randn1(8, seed + 2);
    let params = ConvParams { stride: 2, pad: 2 };

    let (z, _cache) = conv_forward(&a_prev, &weights, &bias, &params)?;
    println!("Z.shape = {:?}", z.dim());
    println!("Z's mean = {}", mean(&z));
    println!("Z[3, 2, 1] = {:?}", z.slice(s![3, 2, 1, ..]));
    println!();
    Ok(())
}

fn pooling_demo(seed: u64) -> Result<()> {
    println!("=== pooling forward ===");
    let a_prev = randn4((2, 4, 4, 3), seed);
    let params = PoolParams { window: 3, stride: 2 };

    for mode in [PoolMode::Max, PoolMode::Average] {
        let (a, _cache) = pool_forward(&a_prev, &params, mode)?;
        println!("mode = {}", mode);
        println!("A.shape = {:?}", a.dim());
        println!("A = {:?}", a);
        println!();
    }
    Ok(())
}

fn mean(x: &Array4<f32>) -> f32 {
    x.mean().unwrap_or(0.0)
}

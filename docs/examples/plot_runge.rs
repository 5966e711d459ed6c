// Runge's function 1/(1+25x²) with 21 equispaced knots on [-1, 1].
// Prints JSON with knot points and 400 evaluation points for four blending orders:
//   {"kx":[...], "ky":[...], "x":[...], "y_true":[...],
//    "y_d0":[...], "y_d3":[...], "y_d8":[...], "y_poly":[...]}
// "y_poly" uses d = n - 1, the interpolating polynomial, and shows the Runge
// oscillation near the ends that the low orders avoid.

use baryrat::interp::BarycentricRational;

fn fmt_arr(v: &[f64]) -> String {
    let inner: Vec<String> = v.iter().map(|x| format!("{x:.6}")).collect();
    format!("[{}]", inner.join(","))
}

fn runge(x: f64) -> f64 {
    1.0 / (1.0 + 25.0 * x * x)
}

fn main() {
    const K: usize = 21;
    let kx: [f64; K] = core::array::from_fn(|i| -1.0 + 2.0 * i as f64 / (K - 1) as f64);
    let ky: [f64; K] = core::array::from_fn(|i| runge(kx[i]));

    let orders = [0, 3, 8, K - 1];
    let interps = orders.map(|d| BarycentricRational::with_order(kx, ky, d).unwrap());

    const N: usize = 400;
    let mut x_vals = vec![0.0_f64; N];
    let mut y_true = vec![0.0_f64; N];
    let mut y_interp = [(); 4].map(|_| vec![0.0_f64; N]);

    for i in 0..N {
        let x = -1.0 + 2.0 * i as f64 / (N - 1) as f64;
        x_vals[i] = x;
        y_true[i] = runge(x);
        for (ys, interp) in y_interp.iter_mut().zip(&interps) {
            ys[i] = interp.eval(x);
        }
    }

    for (d, ys) in orders.iter().zip(&y_interp) {
        let max_err = ys
            .iter()
            .zip(&y_true)
            .map(|(a, b)| (a - b).abs())
            .fold(0.0, f64::max);
        eprintln!("d = {d:2}: max abs error {max_err:.3e}");
    }

    println!(
        "{{\"kx\":{},\"ky\":{},\"x\":{},\"y_true\":{},\"y_d0\":{},\"y_d3\":{},\"y_d8\":{},\"y_poly\":{}}}",
        fmt_arr(&kx),
        fmt_arr(&ky),
        fmt_arr(&x_vals),
        fmt_arr(&y_true),
        fmt_arr(&y_interp[0]),
        fmt_arr(&y_interp[1]),
        fmt_arr(&y_interp[2]),
        fmt_arr(&y_interp[3])
    );
}

use std::io::{self, Write};
use std::process::ExitCode;

use argh::FromArgs;

use matalg::{
    det2, det3, dot_product, inverse_with_tolerance, matmul, print_matrix, reduce_row_echelon,
    transpose, vector_length, Matrix,
};

mod parse;

use parse::{matrix_arg, vector_arg, CliError, VectorArg};

#[derive(FromArgs, Debug)]
/// Dense matrix algebra from the command line. Matrices are written as "1,2;3,4".
struct Args {
    #[argh(subcommand)]
    command: Command,
}

#[derive(FromArgs, Debug)]
#[argh(subcommand)]
enum Command {
    Det(DetArgs),
    Transpose(TransposeArgs),
    Dot(DotArgs),
    Length(LengthArgs),
    Mul(MulArgs),
    Rref(RrefArgs),
    Inverse(InverseArgs),
    Rank(RankArgs),
}

#[derive(FromArgs, Debug)]
#[argh(subcommand, name = "det")]
/// Determinant of a 2x2 or 3x3 matrix.
struct DetArgs {
    /// the input matrix
    #[argh(option, short = 'm', from_str_fn(matrix_arg))]
    matrix: Matrix<f64>,
}

#[derive(FromArgs, Debug)]
#[argh(subcommand, name = "transpose")]
/// Transpose of a matrix.
struct TransposeArgs {
    /// the input matrix
    #[argh(option, short = 'm', from_str_fn(matrix_arg))]
    matrix: Matrix<f64>,
}

#[derive(FromArgs, Debug)]
#[argh(subcommand, name = "dot")]
/// Dot product of two vectors.
struct DotArgs {
    /// first vector, e.g. "1,2,3"
    #[argh(option, short = 'a', from_str_fn(vector_arg))]
    a: VectorArg,

    /// second vector
    #[argh(option, short = 'b', from_str_fn(vector_arg))]
    b: VectorArg,
}

#[derive(FromArgs, Debug)]
#[argh(subcommand, name = "length")]
/// Euclidean length of a vector.
struct LengthArgs {
    /// the input vector, e.g. "3,4"
    #[argh(option, short = 'v', from_str_fn(vector_arg))]
    vector: VectorArg,
}

#[derive(FromArgs, Debug)]
#[argh(subcommand, name = "mul")]
/// Product of two matrices.
struct MulArgs {
    /// left matrix
    #[argh(option, short = 'a', from_str_fn(matrix_arg))]
    a: Matrix<f64>,

    /// right matrix
    #[argh(option, short = 'b', from_str_fn(matrix_arg))]
    b: Matrix<f64>,
}

#[derive(FromArgs, Debug)]
#[argh(subcommand, name = "rref")]
/// Reduced row-echelon form of a matrix.
struct RrefArgs {
    /// the input matrix
    #[argh(option, short = 'm', from_str_fn(matrix_arg))]
    matrix: Matrix<f64>,

    /// entries with an absolute value at or below this are treated as zero
    #[argh(option, short = 't', default = "0.0")]
    tolerance: f64,
}

#[derive(FromArgs, Debug)]
#[argh(subcommand, name = "inverse")]
/// Inverse of a square matrix.
struct InverseArgs {
    /// the input matrix
    #[argh(option, short = 'm', from_str_fn(matrix_arg))]
    matrix: Matrix<f64>,

    /// entries with an absolute value at or below this are treated as zero
    #[argh(option, short = 't', default = "0.0")]
    tolerance: f64,
}

#[derive(FromArgs, Debug)]
#[argh(subcommand, name = "rank")]
/// Rank of a matrix.
struct RankArgs {
    /// the input matrix
    #[argh(option, short = 'm', from_str_fn(matrix_arg))]
    matrix: Matrix<f64>,

    /// entries with an absolute value at or below this are treated as zero
    #[argh(option, short = 't', default = "0.0")]
    tolerance: f64,
}

fn run<W: Write>(command: Command, out: &mut W) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Command::Det(args) => {
            let det = match args.matrix.shape() {
                (2, 2) => det2(&args.matrix)?,
                (3, 3) => det3(&args.matrix)?,
                (rows, cols) => return Err(CliError::UnsupportedDeterminant(rows, cols).into()),
            };
            writeln!(out, "{det:?}")?;
        }
        Command::Transpose(args) => print_matrix(&transpose(&args.matrix), out)?,
        Command::Dot(args) => writeln!(out, "{:?}", dot_product(&args.a.0, &args.b.0)?)?,
        Command::Length(args) => writeln!(out, "{:?}", vector_length(&args.vector.0))?,
        Command::Mul(args) => print_matrix(&matmul(&args.a, &args.b)?, out)?,
        Command::Rref(args) => {
            let mut mat = args.matrix;
            let pivots = reduce_row_echelon(&mut mat, args.tolerance);
            log::info!("pivot columns: {pivots:?}");
            print_matrix(&mat, out)?;
        }
        Command::Inverse(args) => {
            print_matrix(&inverse_with_tolerance(&args.matrix, args.tolerance)?, out)?
        }
        Command::Rank(args) => {
            let mut mat = args.matrix;
            let rank = reduce_row_echelon(&mut mat, args.tolerance).len();
            writeln!(out, "{rank}")?;
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let args: Args = argh::from_env();
    log::debug!("{args:?}");

    match run(args.command, &mut io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

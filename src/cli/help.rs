/// Usage text printed for `help`, an empty argument list, or invalid arguments.
pub const HELP_TEXT: &str = "\
File stitcher help
    Usage:  stitcher [-v|-h] [-a] [-r] [-o %output_name%] [*files]
    -v:     Vertical file stitching, up to down order by default
    -h:     Horizontal file stitching, right to left order by default
    -a:     Stitch files in all subfolders together, if this is used, files should not be specified
    -r:     Reverse file order while stitching
    -o:     Specifies a prefix for all output files when -a is passed, otherwise specifies the name of the output file
    *files: Space-separated list of files to stitch, only needed when not passing -a
    help:   Show this message";

pub fn print_help() {
    println!("{HELP_TEXT}");
}

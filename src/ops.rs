// Operation registry: the closed set of DeepAI models this tool can drive.
// Each variant carries its descriptor data through accessor methods so that
// dispatch stays an exhaustive match instead of string comparisons spread
// around the crate.

/// One variant per supported transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Colorize,
    Superres,
    Similarity,
    Deepdream,
    Waifu2x,
}

impl Operation {
    /// Map a dispatch token to an operation. Names are exact and lowercase;
    /// anything else is the caller's `UnknownOperation` error.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "colorize" => Some(Operation::Colorize),
            "superres" => Some(Operation::Superres),
            "similarity" => Some(Operation::Similarity),
            "deepdream" => Some(Operation::Deepdream),
            "waifu2x" => Some(Operation::Waifu2x),
            _ => None,
        }
    }

    /// Iterate over every registered operation.
    pub fn iter() -> impl Iterator<Item = &'static Operation> {
        static OPERATIONS: [Operation; 5] = [
            Operation::Colorize,
            Operation::Superres,
            Operation::Similarity,
            Operation::Deepdream,
            Operation::Waifu2x,
        ];

        OPERATIONS.iter()
    }

    /// The subcommand name, also the suffix of derived output files.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Colorize => "colorize",
            Operation::Superres => "superres",
            Operation::Similarity => "similarity",
            Operation::Deepdream => "deepdream",
            Operation::Waifu2x => "waifu2x",
        }
    }

    /// The model identifier in the hosted API's URL path.
    pub fn endpoint(&self) -> &'static str {
        match self {
            Operation::Colorize => "colorizer",
            Operation::Superres => "torch-srgan",
            Operation::Similarity => "image-similarity",
            Operation::Deepdream => "deepdream",
            Operation::Waifu2x => "waifu2x",
        }
    }

    /// Usage text printed when the operation's inputs are missing or
    /// invalid.
    pub fn usage(&self) -> &'static str {
        match self {
            Operation::Colorize => "USAGE: colorize image.jpg",
            Operation::Superres => "USAGE: superres image.jpg",
            Operation::Similarity => "Missing Images.\n  USAGE: similarity image1.jpg image2.jpg",
            Operation::Deepdream => "Missing Images.\n  USAGE: deepdream image1.jpg",
            Operation::Waifu2x => "Missing Images.\n  USAGE: waifu2x image1.jpg",
        }
    }

    /// Where the hosted model is documented.
    pub fn docs_url(&self) -> &'static str {
        match self {
            Operation::Colorize => "https://deepai.org/machine-learning-model/colorizer",
            Operation::Superres => "https://deepai.org/machine-learning-model/torch-srgan",
            Operation::Similarity => "https://deepai.org/machine-learning-model/image-similarity",
            Operation::Deepdream => "https://deepai.org/machine-learning-model/deepdream",
            Operation::Waifu2x => "https://deepai.org/machine-learning-model/waifu2x",
        }
    }

    /// How many input images the model consumes.
    pub fn image_count(&self) -> usize {
        match self {
            Operation::Similarity => 2,
            _ => 1,
        }
    }
}

/// Listing shown at the bottom of `--help`: each operation with its argument
/// shape and the page documenting the model behind it.
pub fn operations_help() -> String {
    let mut help = String::from("Operations:\n");
    for operation in Operation::iter() {
        let arguments = if operation.image_count() == 2 {
            "<image1> <image2>"
        } else {
            "<image>"
        };
        help.push_str(&format!(
            "  {} {}\n      {}\n",
            operation.name(),
            arguments,
            operation.docs_url()
        ));
    }
    help
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatch_names_map_one_to_one() {
        for operation in Operation::iter() {
            assert_eq!(Operation::from_name(operation.name()), Some(*operation));
        }
        assert_eq!(Operation::from_name("blur"), None);
        assert_eq!(Operation::from_name("Colorize"), None);
        assert_eq!(Operation::from_name(""), None);
    }

    #[test]
    fn similarity_is_the_only_two_image_operation() {
        for operation in Operation::iter() {
            let expected = if *operation == Operation::Similarity { 2 } else { 1 };
            assert_eq!(operation.image_count(), expected);
        }
    }

    #[test]
    fn endpoints_live_under_their_docs_pages() {
        for operation in Operation::iter() {
            assert!(operation.docs_url().ends_with(operation.endpoint()));
        }
    }

    #[test]
    fn help_lists_every_operation() {
        let help = operations_help();
        for operation in Operation::iter() {
            assert!(help.contains(operation.name()));
            assert!(help.contains(operation.docs_url()));
        }
    }
}

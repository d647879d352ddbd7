//! Tests for tool defaults and output settings

#[cfg(test)]
mod tests {
    use tilesheet::io::configuration::{
        DEFAULT_BLOCK_HEIGHT, DEFAULT_BLOCK_SIZE, DEFAULT_BLOCK_WIDTH, DEFAULT_COLS,
        DEFAULT_IMAGE_COUNT, DEFAULT_OUT_PREFIX, DEFAULT_PREVIEW_COLS, DEFAULT_ROWS,
        DEFAULT_TILE_SIZE, DESKTOP_DIR_NAME, OUTPUT_FOLDER_PREFIX, PREVIEW_BACKGROUND,
        PREVIEW_FILE_NAME, PREVIEW_PADDING, TIMESTAMP_FORMAT,
    };

    // Tests tile generator grid defaults
    // Verified by changing default values
    #[test]
    fn test_tile_defaults() {
        assert_eq!(DEFAULT_COLS, 8);
        assert_eq!(DEFAULT_ROWS, 5);
        assert_eq!(DEFAULT_TILE_SIZE, 256);
        assert_eq!(DEFAULT_PREVIEW_COLS, 8);
    }

    // Tests contact sheet appearance
    // Verified by changing padding and background
    #[test]
    fn test_preview_appearance() {
        assert_eq!(PREVIEW_PADDING, 2);
        assert_eq!(PREVIEW_BACKGROUND, [30, 30, 30]);
        assert_eq!(PREVIEW_FILE_NAME, "preview.png");
    }

    // Tests output folder naming pieces
    // Verified by changing the timestamp separator
    #[test]
    fn test_output_naming() {
        assert_eq!(DESKTOP_DIR_NAME, "Desktop");
        assert_eq!(OUTPUT_FOLDER_PREFIX, "image_tiles_");
        assert_eq!(TIMESTAMP_FORMAT, "%Y%m%d_%H%M%S");
    }

    // Tests block generator defaults
    // Verified by changing default values
    #[test]
    fn test_block_defaults() {
        assert_eq!(DEFAULT_BLOCK_WIDTH, 128);
        assert_eq!(DEFAULT_BLOCK_HEIGHT, 128);
        assert_eq!(DEFAULT_BLOCK_SIZE, 10);
        assert_eq!(DEFAULT_IMAGE_COUNT, 10);
        assert_eq!(DEFAULT_OUT_PREFIX, "random_image_");
    }

    // Tests filesystem safety of fixed names
    // Verified by adding special character
    #[test]
    fn test_names_no_special_chars() {
        for name in [OUTPUT_FOLDER_PREFIX, DEFAULT_OUT_PREFIX] {
            for ch in name.chars() {
                assert!(
                    ch.is_alphanumeric() || ch == '_' || ch == '-',
                    "Name contains invalid character: {ch}"
                );
            }
        }
    }
}

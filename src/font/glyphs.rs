// src/font/glyphs.rs

//! Built-in glyph bitmaps for printable ASCII.
//!
//! Each entry is a character and its rows joined by `|`, topmost ink row
//! first. Every glyph runs down to the bottom of the two descender rows, so
//! bottom-aligning glyphs places them on a shared baseline. Cap height is 7
//! rows, x-height is 5.
//!
//! Cell intensities: `#` = 255, `+` = 170, `.` = 85, space = 0. A one-column
//! gutter is appended to the right of every glyph when the table is built.

pub(crate) const GLYPH_SOURCE: &[(char, &str)] = &[
    (' ', "  "),
    ('!', "#|#|#|#|#| |#| | "),
    ('"', "# #|# #|# #|   |   |   |   |   |   "),
    ('#', " # # | # # |#####| # # |#####| # # | # # |     |     "),
    ('$', "  #  | ####|# #  | ### |  # #|#### |  #  |     |     "),
    ('%', "##   |##  #|   # |  #  | #   |#  ##|   ##|     |     "),
    ('&', " ##  |#  # |# #  | #   |# # #|#  # | ## #|     |     "),
    ('\'', "#|#|#| | | | | | "),
    ('(', "  #| # |#  |#  |#  | # |  #|   |   "),
    (')', "#  | # |  #|  #|  #| # |#  |   |   "),
    ('*', "  #  |# # #| ### |# # #|  #  |     |     |     "),
    ('+', "  #  |  #  |#####|  #  |  #  |     |     |     "),
    (',', " #| #|# "),
    ('-', "#####|     |     |     |     |     "),
    ('.', "#| | "),
    ('/', "    #|    #|   # |  #  | #   |#    |#    |     |     "),
    ('0', " ### |#   #|#  ##|# # #|##  #|#   #| ### |     |     "),
    ('1', "  #  | ##  |  #  |  #  |  #  |  #  | ### |     |     "),
    ('2', " ### |#   #|    #|   # |  #  | #   |#####|     |     "),
    ('3', "#####|   # |  #  |   # |    #|#   #| ### |     |     "),
    ('4', "   # |  ## | # # |#  # |#####|   # |   # |     |     "),
    ('5', "#####|#    |#### |    #|    #|#   #| ### |     |     "),
    ('6', "  ## | #   |#    |#### |#   #|#   #| ### |     |     "),
    ('7', "#####|    #|   # |  #  | #   | #   | #   |     |     "),
    ('8', " ### |#   #|#   #| ### |#   #|#   #| ### |     |     "),
    ('9', " ### |#   #|#   #| ####|    #|   # | ##  |     |     "),
    (':', "##|##|  |##|##|  |  |  "),
    (';', "##|##|  |##|##| #|# |  "),
    ('<', "   #|  # | #  |#   | #  |  # |   #|    |    "),
    ('=', "#####|     |#####|     |     |     |     "),
    ('>', "#   | #  |  # |   #|  # | #  |#   |    |    "),
    ('?', " ### |#   #|    #|   # |  #  |     |  #  |     |     "),
    ('@', " ### |#   #|# ###|# # #|# ###|#    | ####|     |     "),
    ('A', " ### |#   #|#   #|#####|#   #|#   #|#   #|     |     "),
    ('B', "#### |#   #|#   #|#### |#   #|#   #|#### |     |     "),
    ('C', " ### |#   #|#    |#    |#    |#   #| ### |     |     "),
    ('D', "#### |#   #|#   #|#   #|#   #|#   #|#### |     |     "),
    ('E', "#####|#    |#    |#### |#    |#    |#####|     |     "),
    ('F', "#####|#    |#    |#### |#    |#    |#    |     |     "),
    ('G', " ### |#   #|#    |# ###|#   #|#   #| ####|     |     "),
    ('H', "#   #|#   #|#   #|#####|#   #|#   #|#   #|     |     "),
    ('I', "###| # | # | # | # | # |###|   |   "),
    ('J', "  ###|   # |   # |   # |   # |#  # | ##  |     |     "),
    ('K', "#   #|#  # |# #  |##   |# #  |#  # |#   #|     |     "),
    ('L', "#    |#    |#    |#    |#    |#    |#####|     |     "),
    ('M', "#   #|## ##|# # #|# # #|#   #|#   #|#   #|     |     "),
    ('N', "#   #|#   #|##  #|# # #|#  ##|#   #|#   #|     |     "),
    ('O', " ### |#   #|#   #|#   #|#   #|#   #| ### |     |     "),
    ('P', "#### |#   #|#   #|#### |#    |#    |#    |     |     "),
    ('Q', " ### |#   #|#   #|#   #|# # #|#  # | ## #|     |     "),
    ('R', "#### |#   #|#   #|#### |# #  |#  # |#   #|     |     "),
    ('S', " ####|#    |#    | ### |    #|    #|#### |     |     "),
    ('T', "#####|  #  |  #  |  #  |  #  |  #  |  #  |     |     "),
    ('U', "#   #|#   #|#   #|#   #|#   #|#   #| ### |     |     "),
    ('V', "#   #|#   #|#   #|#   #|#   #|+# #+| +#+ |     |     "),
    ('W', "#   #|#   #|#   #|# # #|# # #|# # #|.# #.|     |     "),
    ('X', "#   #|#   #| # # |  #  | # # |#   #|#   #|     |     "),
    ('Y', "#   #|#   #| # # |  #  |  #  |  #  |  #  |     |     "),
    ('Z', "#####|    #|   # |  #  | #   |#    |#####|     |     "),
    ('[', "###|#  |#  |#  |#  |#  |###|   |   "),
    ('\\', "#    |#    | #   |  #  |   # |    #|    #|     |     "),
    (']', "###|  #|  #|  #|  #|  #|###|   |   "),
    ('^', "  #  | # # |#   #|     |     |     |     |     |     "),
    ('_', "#####|     |     "),
    ('`', "# | #|  |  |  |  |  |  |  "),
    ('a', " ### |    #| ####|#   #| ####|     |     "),
    ('b', "#    |#    |# ## |##  #|#   #|#   #|#### |     |     "),
    ('c', " ### |#    |#    |#   #| ### |     |     "),
    ('d', "    #|    #| ## #|#  ##|#   #|#   #| ####|     |     "),
    ('e', " ### |#   #|#####|#    | ### |     |     "),
    ('f', "  ## | #  #| #   |###  | #   | #   | #   |     |     "),
    ('g', " ####|#   #|#   #|#   #| ####|    #| ### "),
    ('h', "#    |#    |# ## |##  #|#   #|#   #|#   #|     |     "),
    ('i', " # |   |## | # | # | # |###|   |   "),
    ('j', "   #|    |  ##|   #|   #|   #|   #|#  #| ## "),
    ('k', "#   |#   |#  #|# # |##  |# # |#  #|    |    "),
    ('l', "## | # | # | # | # | # |###|   |   "),
    ('m', "## # |# # #|# # #|#   #|#   #|     |     "),
    ('n', "# ## |##  #|#   #|#   #|#   #|     |     "),
    ('o', " ### |#   #|#   #|#   #| ### |     |     "),
    ('p', "#### |#   #|#   #|#   #|#### |#    |#    "),
    ('q', " ####|#   #|#   #|#   #| ####|    #|    #"),
    ('r', "# ## |##  #|#    |#    |#    |     |     "),
    ('s', " ####|#    | ### |    #|#### |     |     "),
    ('t', " #  |####| #  | #  | #  |  ##|    |    "),
    ('u', "#   #|#   #|#   #|#  ##| ## #|     |     "),
    ('v', "#   #|#   #|#   #|+# #+| +#+ |     |     "),
    ('w', "#   #|#   #|# # #|# # #|.# #.|     |     "),
    ('x', "#   #| # # |  #  | # # |#   #|     |     "),
    ('y', "#   #|#   #|#   #|#   #| ####|    #| ### "),
    ('z', "#####|   # |  #  | #   |#####|     |     "),
    ('{', "  #| # | # |#  | # | # |  #|   |   "),
    ('|', "#|#|#|#|#|#|#|#|#"),
    ('}', "#  | # | # |  #| # | # |#  |   |   "),
    ('~', " #   |# # #|   # |     |     |     |     "),
];

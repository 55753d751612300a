pub mod d400_grc_overview;

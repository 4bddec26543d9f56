pub mod d400_statistics;

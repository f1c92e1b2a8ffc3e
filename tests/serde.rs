extern crate algebra;

#[cfg(test)]
mod tests {
    use algebra::matrices::Matrix;

    #[test]
    fn check_serialization_through_toml() {
        let matrix = Matrix::from_rows(vec![vec![1.0, 2.5], vec![-3.0, 4.0]]).unwrap();
        let serialized = toml::to_string(&matrix).unwrap();
        assert!(serialized.contains("rows = 2"));
        assert!(serialized.contains("columns = 2"));
        let deserialized: Matrix = toml::from_str(&serialized).unwrap();
        assert_eq!(deserialized, matrix);
    }

    #[test]
    fn check_deserialization_validates_size() {
        let negative: Result<Matrix, _> = toml::from_str("rows = -1\ncolumns = 2\ndata = []\n");
        let error = negative.unwrap_err().to_string();
        assert!(error.contains("must not be negative"), "{}", error);

        let short: Result<Matrix, _> = toml::from_str("rows = 2\ncolumns = 2\ndata = [1.0, 2.0]\n");
        let error = short.unwrap_err().to_string();
        assert!(error.contains("2 values cannot fill a 2x2 matrix"), "{}", error);
    }

    #[test]
    fn check_empty_matrix() {
        let matrix = Matrix::new(0, 3).unwrap();
        let serialized = toml::to_string(&matrix).unwrap();
        let deserialized: Matrix = toml::from_str(&serialized).unwrap();
        assert_eq!(deserialized.dimensions(), (0, 3));
    }
}

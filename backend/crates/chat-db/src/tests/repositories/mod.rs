mod corrupt_rows;

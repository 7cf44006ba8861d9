use serde::ser::SerializeStruct;
use serde::Deserialize;

use crate::matrix::Matrix;

impl<T> serde::Serialize for Matrix<T>
where
    T: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("Matrix", 2)?;
        state.serialize_field("data", self.as_slice())?;
        state.serialize_field("shape", &[self.rows(), self.cols()])?;
        state.end()
    }
}

impl<'de, T> serde::Deserialize<'de> for Matrix<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct MatrixData<T> {
            data: Vec<T>,
            shape: [usize; 2],
        }

        let MatrixData { data, shape } = MatrixData::deserialize(deserializer)?;

        Matrix::from_shape_vec((shape[0], shape[1]), data).map_err(serde::de::Error::custom)
    }
}

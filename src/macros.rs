/// Builds the by-value and by-reference forms of a binary operator on top
/// of its `OpAssign<&T>` implementation, which does the actual work.
macro_rules! forward_binop {
    ($t: ty, $imp: ident, $method: ident, $imp_assign: ident, $method_assign: ident) => {
        impl $imp_assign<$t> for $t {
            fn $method_assign(&mut self, rhs: $t) {
                <$t as $imp_assign<&$t>>::$method_assign(self, &rhs);
            }
        }

        impl $imp<&$t> for &$t {
            type Output = $t;

            fn $method(self, rhs: &$t) -> Self::Output {
                let mut z = self.clone();
                <$t as $imp_assign<&$t>>::$method_assign(&mut z, rhs);
                z
            }
        }

        impl $imp<$t> for &$t {
            type Output = $t;

            fn $method(self, rhs: $t) -> Self::Output {
                let mut z = self.clone();
                <$t as $imp_assign<&$t>>::$method_assign(&mut z, &rhs);
                z
            }
        }

        impl $imp<&$t> for $t {
            type Output = $t;

            fn $method(mut self, rhs: &$t) -> Self::Output {
                <$t as $imp_assign<&$t>>::$method_assign(&mut self, rhs);
                self
            }
        }

        impl $imp for $t {
            type Output = $t;

            fn $method(mut self, rhs: $t) -> Self::Output {
                <$t as $imp_assign<&$t>>::$method_assign(&mut self, &rhs);
                self
            }
        }
    };
}

/// Unwraps the result of an arithmetic operator, panicking with the error
/// text the same way primitive integer operators do.
macro_rules! or_panic {
    ($result: expr) => {
        match $result {
            Ok(val) => val,
            Err(err) => panic!("{}", err),
        }
    };
}
